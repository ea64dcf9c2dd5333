// ABOUTME: Reference data layer with repository traits, stores and the shared handle bundle
// ABOUTME: Opens the configured backend and seeds it from a JSON document or the built-in dataset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Reference Data
//!
//! The conversion pipeline only reads reference data. Services hold a
//! [`Repositories`] bundle of trait objects, so the in-memory store and the
//! `SQLite` store are interchangeable.

use std::sync::Arc;

use tracing::info;

use crate::config::{DatabaseUrl, ServerConfig};
use crate::errors::AppResult;

/// In-memory store
pub mod memory;
/// Repository traits
pub mod repositories;
/// Reference data documents and the built-in dataset
pub mod seed;
/// `SQLite` store
pub mod sqlite;

pub use memory::InMemoryStore;
pub use repositories::{
    AnimalImpactRepository, ClimateRepository, NutritionRepository, RecipeRepository,
    SubstitutionRepository, SupplementRepository,
};
pub use seed::ReferenceData;
pub use sqlite::SqliteStore;

/// Shared handles to every reference table
#[derive(Clone)]
pub struct Repositories {
    /// Recipes
    pub recipes: Arc<dyn RecipeRepository>,
    /// Substitution rules
    pub substitutions: Arc<dyn SubstitutionRepository>,
    /// Nutrition records
    pub nutrition: Arc<dyn NutritionRepository>,
    /// Climate metrics
    pub climate: Arc<dyn ClimateRepository>,
    /// Supplement catalog
    pub supplements: Arc<dyn SupplementRepository>,
    /// Animal impact records
    pub animal_impacts: Arc<dyn AnimalImpactRepository>,
}

impl Repositories {
    /// Serve every table from one store
    #[must_use]
    pub fn from_store<S>(store: S) -> Self
    where
        S: RecipeRepository
            + SubstitutionRepository
            + NutritionRepository
            + ClimateRepository
            + SupplementRepository
            + AnimalImpactRepository
            + 'static,
    {
        let store = Arc::new(store);
        Self {
            recipes: store.clone(),
            substitutions: store.clone(),
            nutrition: store.clone(),
            climate: store.clone(),
            supplements: store.clone(),
            animal_impacts: store,
        }
    }
}

/// Open the configured backend and load reference data into it
///
/// Data comes from `config.data_path` when set, otherwise from the built-in
/// dataset. A `SQLite` database that already holds rows is left as is.
///
/// # Errors
///
/// Returns an error if the data file cannot be read or parsed, the database
/// cannot be opened, or the data holds conflicting substitution rules
pub async fn open(config: &ServerConfig) -> AppResult<Repositories> {
    let data = match &config.data_path {
        Some(path) => ReferenceData::load(path).await?,
        None => ReferenceData::builtin(),
    };

    match &config.database {
        DatabaseUrl::Memory => {
            info!(records = data.record_count(), "Using in-memory reference store");
            Ok(Repositories::from_store(InMemoryStore::new(data)?))
        }
        DatabaseUrl::SQLite { .. } | DatabaseUrl::SQLiteMemory => {
            let url = config.database.to_connection_string();
            let store = SqliteStore::connect(&url).await?;
            let written = store.seed_if_empty(&data).await?;
            info!(database = %url, seeded = written, "Using SQLite reference store");
            Ok(Repositories::from_store(store))
        }
    }
}

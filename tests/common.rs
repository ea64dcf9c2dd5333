// ABOUTME: Shared fixtures for integration tests
// ABOUTME: Builds repositories over built-in or custom reference data, plus a failing store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `veganizer`

use std::env;
use std::sync::Once;

use async_trait::async_trait;
use tracing::Level;
use veganizer::database::{
    AnimalImpactRepository, ClimateRepository, InMemoryStore, NutritionRepository,
    RecipeRepository, ReferenceData, Repositories, SubstitutionRepository, SupplementRepository,
};
use veganizer::errors::DatabaseError;
use veganizer::services::ConversionService;
use veganizer_core::models::{
    AnimalImpactRecord, AnimalProductType, ClimateMetric, NutritionRecord, Recipe,
    SubstitutionRule, Supplement,
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Repositories over an in-memory store holding `data`
pub fn repositories(data: ReferenceData) -> Repositories {
    init_test_logging();
    Repositories::from_store(InMemoryStore::new(data).unwrap())
}

/// Repositories over the built-in dataset
pub fn builtin_repositories() -> Repositories {
    repositories(ReferenceData::builtin())
}

/// Conversion service over the built-in dataset
pub fn conversion_service() -> ConversionService {
    ConversionService::new(builtin_repositories())
}

/// Nutrition record with only iron and protein set
pub fn nutrition_record(name: &str, iron_mg: f64, proteins_g: f64) -> NutritionRecord {
    NutritionRecord {
        iron_mg: Some(iron_mg),
        proteins_g: Some(proteins_g),
        ..NutritionRecord::named(name)
    }
}

/// Store whose every call fails, as an unreachable database would
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingStore;

fn unavailable() -> DatabaseError {
    DatabaseError::ConnectionError {
        context: "store unavailable".to_owned(),
    }
}

#[async_trait]
impl RecipeRepository for FailingStore {
    async fn get_by_name(&self, _name: &str) -> Result<Option<Recipe>, DatabaseError> {
        Err(unavailable())
    }

    async fn list_all(&self) -> Result<Vec<Recipe>, DatabaseError> {
        Err(unavailable())
    }
}

#[async_trait]
impl SubstitutionRepository for FailingStore {
    async fn get_by_original(
        &self,
        _original: &str,
    ) -> Result<Option<SubstitutionRule>, DatabaseError> {
        Err(unavailable())
    }

    async fn list_all(&self) -> Result<Vec<SubstitutionRule>, DatabaseError> {
        Err(unavailable())
    }
}

#[async_trait]
impl NutritionRepository for FailingStore {
    async fn get_by_name(&self, _name: &str) -> Result<Option<NutritionRecord>, DatabaseError> {
        Err(unavailable())
    }

    async fn list_all(&self) -> Result<Vec<NutritionRecord>, DatabaseError> {
        Err(unavailable())
    }
}

#[async_trait]
impl ClimateRepository for FailingStore {
    async fn get_by_category(
        &self,
        _category: &str,
    ) -> Result<Option<ClimateMetric>, DatabaseError> {
        Err(unavailable())
    }

    async fn list_all(&self) -> Result<Vec<ClimateMetric>, DatabaseError> {
        Err(unavailable())
    }
}

#[async_trait]
impl SupplementRepository for FailingStore {
    async fn get_by_name(&self, _name: &str) -> Result<Option<Supplement>, DatabaseError> {
        Err(unavailable())
    }

    async fn list_all(&self) -> Result<Vec<Supplement>, DatabaseError> {
        Err(unavailable())
    }
}

#[async_trait]
impl AnimalImpactRepository for FailingStore {
    async fn get_by_product(
        &self,
        _product: AnimalProductType,
    ) -> Result<Option<AnimalImpactRecord>, DatabaseError> {
        Err(unavailable())
    }

    async fn list_all(&self) -> Result<Vec<AnimalImpactRecord>, DatabaseError> {
        Err(unavailable())
    }
}

// ABOUTME: Read-only repository traits over the reference data used by the conversion pipeline
// ABOUTME: One trait per table with keyed lookup by normalized name and a full listing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Reference Data Repositories
//!
//! Keys are compared after normalization: recipe, nutrition and supplement
//! names use the `Key` mode, substitution originals use the `Strict` mode
//! the resolver matches with. Listings return records in store order, which
//! the nutrition matcher relies on for its first-hit rule.

use async_trait::async_trait;
use veganizer_core::errors::DatabaseError;
use veganizer_core::models::{
    AnimalImpactRecord, AnimalProductType, ClimateMetric, NutritionRecord, Recipe,
    SubstitutionRule, Supplement,
};

/// Stored recipes
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Recipe whose normalized name equals the normalized `name`
    async fn get_by_name(&self, name: &str) -> Result<Option<Recipe>, DatabaseError>;

    /// Every stored recipe
    async fn list_all(&self) -> Result<Vec<Recipe>, DatabaseError>;
}

/// Substitution rules
#[async_trait]
pub trait SubstitutionRepository: Send + Sync {
    /// Rule whose normalized original equals the normalized `original`
    async fn get_by_original(&self, original: &str)
        -> Result<Option<SubstitutionRule>, DatabaseError>;

    /// Every rule
    async fn list_all(&self) -> Result<Vec<SubstitutionRule>, DatabaseError>;
}

/// Ciqual-style nutrition records
#[async_trait]
pub trait NutritionRepository: Send + Sync {
    /// First record whose normalized name equals the normalized `name`
    async fn get_by_name(&self, name: &str) -> Result<Option<NutritionRecord>, DatabaseError>;

    /// Every record, in store order
    async fn list_all(&self) -> Result<Vec<NutritionRecord>, DatabaseError>;
}

/// Per-category climate metrics
#[async_trait]
pub trait ClimateRepository: Send + Sync {
    /// Complete metric for `category`; a metric missing any factor is `None`
    async fn get_by_category(&self, category: &str)
        -> Result<Option<ClimateMetric>, DatabaseError>;

    /// Every stored metric, complete or not
    async fn list_all(&self) -> Result<Vec<ClimateMetric>, DatabaseError>;
}

/// Supplement catalog
#[async_trait]
pub trait SupplementRepository: Send + Sync {
    /// Supplement whose normalized name equals the normalized `name`
    async fn get_by_name(&self, name: &str) -> Result<Option<Supplement>, DatabaseError>;

    /// Every supplement
    async fn list_all(&self) -> Result<Vec<Supplement>, DatabaseError>;
}

/// Animals affected per kg of product
#[async_trait]
pub trait AnimalImpactRepository: Send + Sync {
    /// Record for a product type
    async fn get_by_product(
        &self,
        product: AnimalProductType,
    ) -> Result<Option<AnimalImpactRecord>, DatabaseError>;

    /// Every record
    async fn list_all(&self) -> Result<Vec<AnimalImpactRecord>, DatabaseError>;
}

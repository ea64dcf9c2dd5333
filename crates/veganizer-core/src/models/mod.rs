// ABOUTME: Core data models for the recipe veganization pipeline
// ABOUTME: Re-exports reference records and the serializable conversion result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Reference records are read-only during a conversion and come from the
//! repository layer. Absent numeric data is `None`, never zero.
//!
//! ## Core Models
//!
//! - `Recipe`: a stored recipe with up to six positional ingredient slots
//! - `SubstitutionRule`: maps an animal-derived ingredient to a plant-based one
//! - `NutritionRecord`: Ciqual-style per-100 g nutrition facts
//! - `Supplement`: a recommended supplement with per-serving nutrition and impact
//! - `ClimateMetric`: per-kg environmental impact of a product category
//! - `AnimalImpactRecord`: animals affected per kg of an animal product
//! - `ConversionResult`: the composite comparison returned for one recipe

mod animal;
mod climate;
mod conversion;
mod nutrition;
mod recipe;
mod substitution;
mod supplement;

pub use animal::{
    AnimalBreakdown, AnimalDetail, AnimalImpactRecord, AnimalProductType, AnimalSavings,
    AnimalType,
};
pub use climate::{
    ClimateComparison, ClimateDetails, ClimateFactors, ClimateMetric, ClimateTotals,
    IngredientImpact,
};
pub use conversion::{
    ConversionResult, NutritionComparison, OriginalRecipe, ShoppingList, VeganIngredient,
    VeganRecipe,
};
pub use nutrition::{NutritionRecord, NutritionTotals};
pub use recipe::{MenuItem, Recipe, RecipeSlot, RecipeSuggestion};
pub use substitution::SubstitutionRule;
pub use supplement::{Supplement, SupplementKind, SupplementPriority};

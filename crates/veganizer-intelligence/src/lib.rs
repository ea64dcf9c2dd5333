// ABOUTME: Recipe veganization engine with matching, nutrition, climate and animal calculators
// ABOUTME: Pure synchronous algorithms operating on read-only reference data snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Veganizer Intelligence
//!
//! Every calculator in this crate is built from a snapshot of reference data
//! (substitution rules, nutrition records, climate metrics, animal impact
//! records) and is a pure function of that snapshot and its input. Lookup
//! misses never fail: they resolve to documented fallback values.
//!
//! Per-ingredient work runs on rayon's pool with indexed parallel iterators,
//! so detail arrays keep the caller's ingredient order.

/// Per-ingredient animal product mapping and animals-spared math
pub mod animal;
/// Ingredient category mapping and climate comparison
pub mod climate;
/// Linking of recipe and substitution ingredients to nutrition records
pub mod linker;
/// Text canonicalization shared by every matcher
pub mod normalize;
/// Nutrition lookup, aggregation and supplement selection
pub mod nutrition;
/// Per-ingredient portion weights
pub mod portion;
/// Rounding helpers
pub mod precision;
/// Recipe name matching and search suggestions
pub mod recipes;
/// Shopping list categorization and cost estimate
pub mod shopping;
/// Substitution rule matching
pub mod substitution;

pub use animal::{animal_product_for, AnimalCalculator};
pub use climate::{climate_category_for, ClimateCalculator};
pub use linker::{IngredientLinker, LinkMatch, LinkStats, LinkingReport};
pub use normalize::{clean_for_nutrition_lookup, normalize, NormalizeMode};
pub use nutrition::{NutritionCalculator, SupplementPolicy};
pub use portion::PortionPlan;
pub use recipes::{recipe_key, suggestion_for, RecipeMatcher};
pub use shopping::build_shopping_list;
pub use substitution::{substitution_key, SubstitutionResolver};

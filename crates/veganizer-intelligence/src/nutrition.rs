// ABOUTME: Nutrition lookup and aggregation with supplement augmentation for vegan recipes
// ABOUTME: Tiered record matching, per-portion summing, deficiency-driven supplement selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Nutrition Aggregator
//!
//! Record lookup for a cleaned, normalized ingredient name:
//!
//! 1. exact name,
//! 2. prefix (`"<name>,"` or `"<name> "`), which catches compound entries
//!    such as "poulet, viande, crue",
//! 3. containment.
//!
//! Within tiers 2 and 3 the first record in store order wins, skipping
//! composite dishes ("soupe", "pizza", "plat préparé") unless nothing else
//! matched.
//!
//! Unknown ingredients contribute fixed default values so the aggregation
//! always produces a complete figure.

use std::collections::HashMap;

use rayon::prelude::*;
use tracing::{debug, warn};
use veganizer_core::constants::nutrition_defaults;
use veganizer_core::constants::supplements::{
    B12, CALCIUM, CALCIUM_THRESHOLD_MG, IRON, IRON_THRESHOLD_MG, OMEGA_3, PROTEIN,
    PROTEIN_THRESHOLD_G, ZINC, ZINC_THRESHOLD_MG,
};
use veganizer_core::models::{NutritionComparison, NutritionRecord, NutritionTotals, Supplement};

use crate::normalize::{clean_for_nutrition_lookup, normalize, NormalizeMode};
use crate::portion::PortionPlan;
use crate::precision::round_to;

/// Record names containing these words describe prepared dishes
const COMPOSITE_DISH_KEYWORDS: &[&str] = &[
    "salade",
    "soupe",
    "plat",
    "pizza",
    "burger",
    "sandwich",
    "preemballe",
    "prepare",
    "tajine",
    "couscous",
    "pastilla",
    "pates",
    "riz avec",
    "poelee",
];

/// Values applied per portion when no record matches
#[must_use]
pub const fn default_ingredient_totals() -> NutritionTotals {
    NutritionTotals {
        calories: nutrition_defaults::CALORIES,
        proteins: nutrition_defaults::PROTEINS_G,
        carbs: nutrition_defaults::CARBS_G,
        fats: nutrition_defaults::FATS_G,
        fiber: nutrition_defaults::FIBER_G,
        calcium: nutrition_defaults::CALCIUM_MG,
        iron: nutrition_defaults::IRON_MG,
        zinc: nutrition_defaults::ZINC_MG,
    }
}

#[derive(Debug, Clone)]
struct IndexedRecord {
    key: String,
    composite: bool,
    record: NutritionRecord,
}

/// Looks up and sums nutrition values over a snapshot of nutrition records
#[derive(Debug, Clone, Default)]
pub struct NutritionCalculator {
    records: Vec<IndexedRecord>,
    exact: HashMap<String, usize>,
}

impl NutritionCalculator {
    /// Index `records` by normalized name, first record wins on collision
    #[must_use]
    pub fn new(records: Vec<NutritionRecord>) -> Self {
        let mut indexed = Vec::with_capacity(records.len());
        let mut exact = HashMap::with_capacity(records.len());

        for record in records {
            let key = nutrition_key(&record.name);
            if key.is_empty() {
                continue;
            }
            exact.entry(key.clone()).or_insert(indexed.len());
            indexed.push(IndexedRecord {
                composite: is_composite_dish(&key),
                key,
                record,
            });
        }

        Self {
            records: indexed,
            exact,
        }
    }

    /// Number of indexed records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// No record indexed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Best nutrition record for `ingredient`
    #[must_use]
    pub fn find(&self, ingredient: &str) -> Option<&NutritionRecord> {
        let query = nutrition_key(&clean_for_nutrition_lookup(ingredient));
        if query.is_empty() {
            return None;
        }

        if let Some(&index) = self.exact.get(&query) {
            return Some(&self.records[index].record);
        }

        let comma_prefix = format!("{query},");
        let space_prefix = format!("{query} ");
        prefer_plain(
            self.records
                .iter()
                .filter(|r| r.key.starts_with(&comma_prefix) || r.key.starts_with(&space_prefix)),
        )
        .or_else(|| prefer_plain(self.records.iter().filter(|r| r.key.contains(&query))))
    }

    /// Unrounded values of one ingredient scaled by `reference_factor`
    #[must_use]
    pub fn ingredient_totals(&self, ingredient: &str, reference_factor: f64) -> NutritionTotals {
        self.find(ingredient).map_or_else(
            || {
                debug!(ingredient, "No nutrition record, using defaults");
                default_ingredient_totals()
            },
            NutritionRecord::totals,
        )
        .scaled(reference_factor)
    }

    /// Rounded totals of `ingredients` with portions from `plan`
    #[must_use]
    pub fn aggregate(&self, ingredients: &[String], plan: &PortionPlan) -> NutritionTotals {
        let per_ingredient: Vec<NutritionTotals> = ingredients
            .par_iter()
            .enumerate()
            .map(|(index, ingredient)| {
                self.ingredient_totals(ingredient, plan.reference_factor(index))
            })
            .collect();

        // summed in input order so rounding is reproducible
        let sum = per_ingredient
            .into_iter()
            .fold(NutritionTotals::default(), |acc, totals| acc + totals);
        round_recipe_totals(sum)
    }

    /// Compare original and vegan nutrition, augmenting the vegan side with supplements
    ///
    /// Supplements are chosen from `catalog` against the base vegan totals.
    #[must_use]
    pub fn compare(
        &self,
        original: &[String],
        vegan: &[String],
        plan: &PortionPlan,
        catalog: &[Supplement],
    ) -> NutritionComparison {
        let original_totals = self.aggregate(original, plan);
        let base_vegan = self.aggregate(vegan, plan);

        let supplements = SupplementPolicy.select(&base_vegan, catalog);
        let contribution = supplement_contribution(&supplements);

        NutritionComparison {
            original: original_totals,
            vegan: round_augmented_totals(base_vegan + contribution),
            supplements,
            supplement_contribution: contribution,
        }
    }
}

/// Deficiency thresholds deciding which supplements to recommend
#[derive(Debug, Clone, Copy, Default)]
pub struct SupplementPolicy;

impl SupplementPolicy {
    /// Supplement names recommended for `vegan` totals, in display order
    ///
    /// B12 and omega-3 are always recommended.
    #[must_use]
    pub fn recommended_names(self, vegan: &NutritionTotals) -> Vec<&'static str> {
        let mut names = vec![B12, OMEGA_3];
        if vegan.iron < IRON_THRESHOLD_MG {
            names.push(IRON);
        }
        if vegan.zinc < ZINC_THRESHOLD_MG {
            names.push(ZINC);
        }
        if vegan.calcium < CALCIUM_THRESHOLD_MG {
            names.push(CALCIUM);
        }
        if vegan.proteins < PROTEIN_THRESHOLD_G {
            names.push(PROTEIN);
        }
        names
    }

    /// Recommended supplements found in `catalog`, in display order
    ///
    /// Names missing from the catalog are skipped.
    #[must_use]
    pub fn select(self, vegan: &NutritionTotals, catalog: &[Supplement]) -> Vec<Supplement> {
        self.recommended_names(vegan)
            .into_iter()
            .filter_map(|name| {
                let key = nutrition_key(name);
                let found = catalog.iter().find(|s| nutrition_key(&s.name) == key);
                if found.is_none() {
                    warn!(supplement = name, "Recommended supplement missing from catalog");
                }
                found.cloned()
            })
            .collect()
    }
}

/// Summed per-serving nutrition of `supplements`
#[must_use]
pub fn supplement_contribution(supplements: &[Supplement]) -> NutritionTotals {
    let sum = supplements
        .iter()
        .map(Supplement::nutrition)
        .fold(NutritionTotals::default(), |acc, totals| acc + totals);
    round_augmented_totals(sum)
}

/// First candidate that is not a composite dish, else the first candidate
fn prefer_plain<'a>(
    mut candidates: impl Iterator<Item = &'a IndexedRecord>,
) -> Option<&'a NutritionRecord> {
    let first = candidates.next()?;
    if !first.composite {
        return Some(&first.record);
    }
    Some(
        candidates
            .find(|r| !r.composite)
            .map_or(&first.record, |r| &r.record),
    )
}

fn nutrition_key(name: &str) -> String {
    normalize(name, NormalizeMode::Key)
}

fn is_composite_dish(key: &str) -> bool {
    COMPOSITE_DISH_KEYWORDS.iter().any(|word| key.contains(word))
}

fn round_recipe_totals(t: NutritionTotals) -> NutritionTotals {
    NutritionTotals {
        calories: t.calories.round(),
        proteins: t.proteins.round(),
        carbs: t.carbs.round(),
        fats: t.fats.round(),
        fiber: t.fiber.round(),
        calcium: t.calcium.round(),
        iron: round_to(t.iron, 1),
        zinc: round_to(t.zinc, 1),
    }
}

fn round_augmented_totals(t: NutritionTotals) -> NutritionTotals {
    NutritionTotals {
        calories: t.calories.round(),
        proteins: round_to(t.proteins, 1),
        carbs: round_to(t.carbs, 1),
        fats: round_to(t.fats, 1),
        fiber: round_to(t.fiber, 1),
        calcium: t.calcium.round(),
        iron: round_to(t.iron, 1),
        zinc: round_to(t.zinc, 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, calories: f64) -> NutritionRecord {
        NutritionRecord {
            calories: Some(calories),
            ..NutritionRecord::named(name)
        }
    }

    #[test]
    fn test_exact_match_beats_prefix() {
        let calculator = NutritionCalculator::new(vec![
            record("Tofu, nature", 120.0),
            record("Tofu", 110.0),
        ]);
        assert!((calculator.find("tofu").unwrap().calories.unwrap() - 110.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_prefix_match_handles_compound_names() {
        let calculator = NutritionCalculator::new(vec![
            record("Poulet rôti à la moutarde, plat préparé", 180.0),
            record("Poulet, viande et peau, cru", 200.0),
        ]);
        let found = calculator.find("poulet").unwrap();
        assert_eq!(found.name, "Poulet, viande et peau, cru");
    }

    #[test]
    fn test_containment_skips_composite_dishes() {
        let calculator = NutritionCalculator::new(vec![
            record("Soupe aux lentilles vertes", 60.0),
            record("Lentilles vertes, bouillies", 116.0),
        ]);
        assert_eq!(
            calculator.find("vertes").unwrap().name,
            "Lentilles vertes, bouillies"
        );

        let only_dishes = NutritionCalculator::new(vec![record("Soupe aux lentilles", 60.0)]);
        assert_eq!(
            only_dishes.find("lentilles").unwrap().name,
            "Soupe aux lentilles"
        );
    }

    #[test]
    fn test_cleaning_happens_before_lookup() {
        let calculator = NutritionCalculator::new(vec![record("Seitan", 140.0)]);
        assert!(calculator.find("Seitan entier bio 🌱").is_some());
        assert!(calculator.find("🌱").is_none());
    }

    #[test]
    fn test_unknown_ingredient_uses_defaults() {
        let calculator = NutritionCalculator::default();
        let totals = calculator.aggregate(&["mystère".to_owned()], &PortionPlan::default());
        assert_eq!(totals, default_ingredient_totals());
    }

    #[test]
    fn test_always_recommends_b12_and_omega3() {
        let rich = NutritionTotals {
            proteins: 60.0,
            calcium: 900.0,
            iron: 20.0,
            zinc: 15.0,
            ..NutritionTotals::default()
        };
        assert_eq!(SupplementPolicy.recommended_names(&rich), vec![B12, OMEGA_3]);

        let poor = NutritionTotals::default();
        assert_eq!(
            SupplementPolicy.recommended_names(&poor),
            vec![B12, OMEGA_3, IRON, ZINC, CALCIUM, PROTEIN]
        );
    }
}

// ABOUTME: Animal impact calculator estimating animals and life-years spared
// ABOUTME: Keyword mapping of original ingredients to animal products, per recipe and per menu
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Animal Impact Calculator
//!
//! Only the original ingredient list matters: each ingredient that maps to an
//! animal product contributes `quantity × animals_per_kg` animals. Unmapped
//! ingredients and products without an impact record are skipped.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::LazyLock;

use rayon::prelude::*;
use tracing::debug;
use veganizer_core::constants::animals::DAYS_PER_YEAR;
use veganizer_core::constants::portions::DEFAULT_ANIMAL_QUANTITY_KG;
use veganizer_core::models::{
    AnimalBreakdown, AnimalDetail, AnimalImpactRecord, AnimalProductType, AnimalSavings, Recipe,
};

use crate::normalize::{contains_word, normalize, NormalizeMode};
use crate::precision::round_to;

const PRODUCT_KEYWORDS: &[(&str, AnimalProductType)] = &[
    ("bœuf", AnimalProductType::Beef),
    ("viande de bœuf", AnimalProductType::Beef),
    ("steaks", AnimalProductType::Beef),
    ("côte de bœuf", AnimalProductType::Beef),
    ("viande principale", AnimalProductType::Beef),
    ("viande", AnimalProductType::Beef),
    ("porc", AnimalProductType::Pork),
    ("jambon", AnimalProductType::Pork),
    ("lardons", AnimalProductType::Pork),
    ("saucisse", AnimalProductType::Pork),
    ("chorizo", AnimalProductType::Pork),
    ("poulet", AnimalProductType::Chicken),
    ("volaille", AnimalProductType::Chicken),
    ("blanc de poulet", AnimalProductType::Chicken),
    ("escalope de poulet", AnimalProductType::Chicken),
    ("dinde", AnimalProductType::Chicken),
    ("poisson", AnimalProductType::Fish),
    ("saumon", AnimalProductType::Fish),
    ("thon", AnimalProductType::Fish),
    ("cabillaud", AnimalProductType::Fish),
    ("sole", AnimalProductType::Fish),
    ("lait", AnimalProductType::Dairy),
    ("crème", AnimalProductType::Dairy),
    ("crème fraîche", AnimalProductType::Dairy),
    ("fromage", AnimalProductType::Dairy),
    ("beurre", AnimalProductType::Dairy),
    ("yaourt", AnimalProductType::Dairy),
    ("œufs", AnimalProductType::Eggs),
    ("œuf", AnimalProductType::Eggs),
];

/// Normalized keywords, longest first, ties in lexicographic order
static KEYWORD_INDEX: LazyLock<Vec<(String, AnimalProductType)>> = LazyLock::new(|| {
    let mut index: Vec<(String, AnimalProductType)> = Vec::with_capacity(PRODUCT_KEYWORDS.len());
    for (keyword, product) in PRODUCT_KEYWORDS {
        let key = normalize(keyword, NormalizeMode::Key);
        if !index.iter().any(|(existing, _)| *existing == key) {
            index.push((key, *product));
        }
    }
    index.sort_by(|(a, _), (b, _)| (Reverse(a.len()), a).cmp(&(Reverse(b.len()), b)));
    index
});

/// Animal product category of an ingredient, if it is animal-derived
///
/// Exact match on the normalized ingredient first, then the longest keyword
/// found inside the ingredient as a whole word. The reverse direction never
/// matches, so "ail" does not map through "volaille".
#[must_use]
pub fn animal_product_for(ingredient: &str) -> Option<AnimalProductType> {
    let key = normalize(ingredient, NormalizeMode::Key);
    if key.is_empty() {
        return None;
    }
    if let Some((_, product)) = KEYWORD_INDEX.iter().find(|(keyword, _)| *keyword == key) {
        return Some(*product);
    }
    KEYWORD_INDEX
        .iter()
        .find(|(keyword, _)| contains_word(&key, keyword))
        .map(|(_, product)| *product)
}

/// Animal ingredients of a recipe's original slots
#[must_use]
pub fn extract_animal_ingredients(recipe: &Recipe) -> Vec<String> {
    recipe
        .original_ingredients()
        .into_iter()
        .filter(|ingredient| animal_product_for(ingredient).is_some())
        .collect()
}

struct Contribution {
    animals: f64,
    life_years: f64,
    detail: AnimalDetail,
}

/// Computes animals spared from a snapshot of animal impact records
#[derive(Debug, Clone, Default)]
pub struct AnimalCalculator {
    records: HashMap<AnimalProductType, AnimalImpactRecord>,
}

impl AnimalCalculator {
    /// Index records by product type, first record per product wins
    #[must_use]
    pub fn new(records: Vec<AnimalImpactRecord>) -> Self {
        let mut indexed = HashMap::with_capacity(records.len());
        for record in records {
            indexed.entry(record.product_type).or_insert(record);
        }
        Self { records: indexed }
    }

    /// Record for a product type
    #[must_use]
    pub fn record(&self, product: AnimalProductType) -> Option<&AnimalImpactRecord> {
        self.records.get(&product)
    }

    /// Animals spared by removing `original` ingredients
    ///
    /// `quantities` holds kilograms per ingredient position; a missing,
    /// non-finite or non-positive quantity falls back to 0.1 kg.
    #[must_use]
    pub fn calculate(&self, original: &[String], quantities: Option<&[f64]>) -> AnimalSavings {
        if original.is_empty() {
            return AnimalSavings::default();
        }

        let contributions: Vec<Contribution> = original
            .par_iter()
            .enumerate()
            .filter_map(|(index, ingredient)| {
                let quantity = quantities
                    .and_then(|q| q.get(index).copied())
                    .filter(|q| q.is_finite() && *q > 0.0)
                    .unwrap_or(DEFAULT_ANIMAL_QUANTITY_KG);
                self.contribution(ingredient, quantity)
            })
            .collect();

        let mut savings = AnimalSavings::default();
        let mut breakdown = AnimalBreakdown::default();
        for contribution in contributions {
            savings.total_animals += contribution.animals;
            savings.life_years_saved += contribution.life_years;
            *breakdown.slot_mut(contribution.detail.animal_type) += contribution.animals;
            savings.details.push(contribution.detail);
        }
        savings.animal_breakdown = breakdown;
        round_savings(savings)
    }

    fn contribution(&self, ingredient: &str, quantity_kg: f64) -> Option<Contribution> {
        let product = animal_product_for(ingredient)?;
        let Some(record) = self.records.get(&product) else {
            debug!(ingredient, product = product.as_str(), "No animal impact record");
            return None;
        };

        let animals = quantity_kg * record.animals_per_kg;
        let life_years = life_years_saved(animals, record);
        Some(Contribution {
            animals,
            life_years,
            detail: AnimalDetail {
                ingredient: ingredient.to_owned(),
                animal_type: record.animal_type,
                animal_count: round_to(animals, 2),
                product_type: product,
                quantity_kg,
                life_years_saved: round_to(life_years, 2),
            },
        })
    }

    /// Animals spared by a menu of `(recipe, servings)` over `weeks`
    ///
    /// Each animal ingredient counts 0.1 kg per serving per week. Servings
    /// and weeks below one count as one.
    #[must_use]
    pub fn calculate_menu<'a>(
        &self,
        menu: impl IntoIterator<Item = (&'a Recipe, u32)>,
        weeks: u32,
    ) -> AnimalSavings {
        let weeks = weeks.max(1);
        let mut aggregate = AnimalSavings::default();
        for (recipe, servings) in menu {
            let multiplier = f64::from(servings.max(1)) * f64::from(weeks);
            let ingredients = extract_animal_ingredients(recipe);
            let quantities = vec![DEFAULT_ANIMAL_QUANTITY_KG * multiplier; ingredients.len()];
            let recipe_savings = self.calculate(&ingredients, Some(&quantities));
            debug!(
                recipe = %recipe.name,
                animals = recipe_savings.total_animals,
                "Menu item scored"
            );
            merge(&mut aggregate, recipe_savings);
        }
        round_savings(aggregate)
    }
}

/// Add `source` into `target`, appending its details
pub fn merge(target: &mut AnimalSavings, source: AnimalSavings) {
    target.total_animals += source.total_animals;
    target.life_years_saved += source.life_years_saved;
    let incoming = source.animal_breakdown;
    target.animal_breakdown.cows += incoming.cows;
    target.animal_breakdown.pigs += incoming.pigs;
    target.animal_breakdown.chickens += incoming.chickens;
    target.animal_breakdown.fish += incoming.fish;
    target.animal_breakdown.dairy_cows += incoming.dairy_cows;
    target.animal_breakdown.hens += incoming.hens;
    target.details.extend(source.details);
}

fn life_years_saved(animals: f64, record: &AnimalImpactRecord) -> f64 {
    match (record.lifespan_days, record.actual_age_days) {
        (Some(lifespan), Some(age)) if lifespan > 0.0 && age > 0.0 => {
            animals * (lifespan - age) / DAYS_PER_YEAR
        }
        _ => 0.0,
    }
}

fn round_savings(savings: AnimalSavings) -> AnimalSavings {
    AnimalSavings {
        total_animals: round_to(savings.total_animals, 2),
        animal_breakdown: savings.animal_breakdown.map(|count| round_to(count, 2)),
        life_years_saved: round_to(savings.life_years_saved, 2),
        details: savings.details,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veganizer_core::models::{AnimalType, RecipeSlot};

    fn calculator() -> AnimalCalculator {
        AnimalCalculator::new(vec![
            AnimalImpactRecord::new(
                AnimalProductType::Beef,
                AnimalType::Cow,
                0.004,
                Some(7300.0),
                Some(730.0),
            ),
            AnimalImpactRecord::new(
                AnimalProductType::Chicken,
                AnimalType::Chicken,
                0.5,
                Some(2920.0),
                Some(42.0),
            ),
            AnimalImpactRecord::new(AnimalProductType::Eggs, AnimalType::Hen, 0.2, None, None),
        ])
    }

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn test_keyword_mapping() {
        assert_eq!(animal_product_for("Bœuf"), Some(AnimalProductType::Beef));
        assert_eq!(animal_product_for("boeuf bourguignon"), Some(AnimalProductType::Beef));
        assert_eq!(animal_product_for("blanc de poulet"), Some(AnimalProductType::Chicken));
        assert_eq!(animal_product_for("lardons fumés"), Some(AnimalProductType::Pork));
        assert_eq!(animal_product_for("crème fraîche épaisse"), Some(AnimalProductType::Dairy));
        assert_eq!(animal_product_for("3 oeufs"), Some(AnimalProductType::Eggs));
        assert_eq!(animal_product_for("ail"), None);
        assert_eq!(animal_product_for("carotte"), None);
        assert_eq!(animal_product_for(""), None);
    }

    #[test]
    fn test_empty_input_is_zero() {
        let savings = calculator().calculate(&[], None);
        assert!(savings.total_animals.abs() < f64::EPSILON);
        assert!(savings.details.is_empty());
    }

    #[test]
    fn test_beef_counts_cows_only() {
        let calc = calculator();
        let savings = calc.calculate(&names(&["bœuf"]), Some(&[10.0]));
        assert!((savings.animal_breakdown.cows - 0.04).abs() < 1e-9);
        assert!(savings.animal_breakdown.chickens.abs() < f64::EPSILON);
        assert!(savings.animal_breakdown.hens.abs() < f64::EPSILON);
        assert_eq!(savings.details.len(), 1);
        assert_eq!(savings.details[0].animal_type, AnimalType::Cow);

        let default_quantity = calc.calculate(&names(&["bœuf"]), None);
        assert!((default_quantity.details[0].quantity_kg - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_quantities_and_life_years() {
        let savings = calculator().calculate(
            &names(&["poulet", "carotte", "oeufs"]),
            Some(&[2.0, 1.0, 0.0]),
        );
        assert_eq!(savings.details.len(), 2);
        assert_eq!(savings.details[0].ingredient, "poulet");
        assert!((savings.animal_breakdown.chickens - 1.0).abs() < 1e-9);
        assert!((savings.animal_breakdown.hens - 0.02).abs() < 1e-9);
        assert!((savings.total_animals - 1.02).abs() < 1e-9);
        // (2920 - 42) / 365 years for one chicken, none for hens without lifespan data
        assert!((savings.life_years_saved - 7.88).abs() < 1e-9);
    }

    #[test]
    fn test_menu_scales_by_servings_and_weeks() {
        let recipe = Recipe::new(
            "Poulet basquaise",
            vec![
                RecipeSlot::original("poulet"),
                RecipeSlot::original("poivrons"),
            ],
        );
        let calc = calculator();
        let single = calc.calculate_menu([(&recipe, 1)], 1);
        let scaled = calc.calculate_menu([(&recipe, 2)], 3);
        assert!((single.total_animals - 0.05).abs() < 1e-9);
        assert!((scaled.total_animals - 0.3).abs() < 1e-9);
        assert_eq!(scaled.details.len(), 1);
    }
}

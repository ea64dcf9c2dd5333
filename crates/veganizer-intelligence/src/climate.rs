// ABOUTME: Climate impact calculator mapping ingredients to product categories
// ABOUTME: Per-ingredient impacts, recipe totals and original versus vegan comparison
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Climate Impact Calculator
//!
//! Ingredients map to a canonical product category through a keyword table.
//! Category metrics are stored per kg and scaled by the portion weight. A
//! category without complete metrics contributes fixed fallback figures so
//! totals stay finite.

use std::collections::HashMap;
use std::sync::LazyLock;

use rayon::prelude::*;
use tracing::{debug, warn};
use veganizer_core::constants::climate::{
    DEFAULT_CATEGORY, FALLBACK_CO2_KG, FALLBACK_CO2_REDUCTION, FALLBACK_LAND_M2,
    FALLBACK_LAND_SAVING, FALLBACK_WATER_L, FALLBACK_WATER_SAVING,
};
use veganizer_core::constants::portions::{GRAMS_PER_KG, NUTRITION_REFERENCE_GRAMS};
use veganizer_core::models::{
    ClimateComparison, ClimateDetails, ClimateFactors, ClimateMetric, ClimateTotals,
    IngredientImpact, Supplement,
};

use crate::normalize::{best_containment, normalize, NormalizeMode};
use crate::portion::PortionPlan;
use crate::precision::{reduction_percentage, round_to};

const CATEGORY_KEYWORDS: &[(&str, &str)] = &[
    ("poulet", "chicken"),
    ("boeuf", "beef"),
    ("porc", "pork"),
    ("veau", "beef"),
    ("agneau", "beef"),
    ("poisson", "fish"),
    ("seitan", "seitan"),
    ("tofu", "tofu"),
    ("tempeh", "tempeh"),
    ("lait", "milk"),
    ("fromage", "cheese"),
    ("beurre", "milk"),
    ("crème", "milk"),
    ("oeuf", "eggs"),
    ("oeufs", "eggs"),
    ("lentilles", "lentils"),
    ("haricots", "lentils"),
    ("pois chiches", "chickpeas"),
    ("légumes", "vegetables"),
    ("légume", "vegetables"),
    ("céréales", "grains"),
    ("riz", "grains"),
    ("blé", "grains"),
    ("avoine", "grains"),
    ("noix", "nuts"),
    ("amandes", "nuts"),
];

/// Plant category standing in for each animal category
const VEGAN_ALTERNATIVES: &[(&str, &str)] = &[
    ("chicken", "seitan"),
    ("beef", "seitan"),
    ("pork", "tempeh"),
    ("fish", "tofu"),
    ("milk", "vegetables"),
    ("cheese", "tofu"),
    ("eggs", "tofu"),
];

static KEYWORD_INDEX: LazyLock<HashMap<String, &'static str>> = LazyLock::new(|| {
    CATEGORY_KEYWORDS
        .iter()
        .map(|(keyword, category)| (normalize(keyword, NormalizeMode::Key), *category))
        .collect()
});

/// Climate product category for an ingredient
///
/// Exact keyword match on the normalized ingredient first, then two-way
/// containment, else `"vegetables"`.
#[must_use]
pub fn climate_category_for(ingredient: &str) -> &'static str {
    let key = normalize(ingredient, NormalizeMode::Key);
    if let Some(category) = KEYWORD_INDEX.get(&key) {
        return *category;
    }
    best_containment(
        &key,
        KEYWORD_INDEX
            .iter()
            .map(|(keyword, category)| (keyword.as_str(), *category)),
    )
    .unwrap_or(DEFAULT_CATEGORY)
}

/// Computes climate impacts from a snapshot of category metrics
#[derive(Debug, Clone, Default)]
pub struct ClimateCalculator {
    factors: HashMap<String, ClimateFactors>,
}

impl ClimateCalculator {
    /// Index complete metrics by normalized category
    #[must_use]
    pub fn new(metrics: Vec<ClimateMetric>) -> Self {
        let mut factors = HashMap::with_capacity(metrics.len());
        for metric in metrics {
            match metric.factors() {
                Some(complete) => {
                    factors
                        .entry(normalize(&metric.category, NormalizeMode::Key))
                        .or_insert(complete);
                }
                None => debug!(category = %metric.category, "Ignoring incomplete climate metric"),
            }
        }
        Self { factors }
    }

    /// Number of usable categories
    #[must_use]
    pub fn len(&self) -> usize {
        self.factors.len()
    }

    /// No usable category
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    fn category_factors(&self, category: &str) -> Option<ClimateFactors> {
        self.factors
            .get(&normalize(category, NormalizeMode::Key))
            .copied()
    }

    /// Impact of `grams` of one ingredient, `None` without a complete metric
    #[must_use]
    pub fn ingredient_impact(&self, ingredient: &str, grams: f64) -> Option<IngredientImpact> {
        self.category_factors(climate_category_for(ingredient))
            .map(|factors| scaled_impact(factors, grams))
    }

    /// Impact of a 100 g portion of the plant alternative to an animal ingredient
    ///
    /// Only ingredients that map exactly to an animal category have an
    /// alternative.
    #[must_use]
    pub fn vegan_alternative_impact(&self, original: &str) -> Option<IngredientImpact> {
        let key = normalize(original, NormalizeMode::Key);
        let category = KEYWORD_INDEX.get(&key)?;
        let (_, alternative) = VEGAN_ALTERNATIVES
            .iter()
            .find(|(animal, _)| animal == category)?;
        self.category_factors(alternative)
            .map(|factors| scaled_impact(factors, NUTRITION_REFERENCE_GRAMS))
    }

    /// Summed impact of an ingredient list
    ///
    /// Ingredients without a metric add the fallback figures scaled to their
    /// portion weight.
    #[must_use]
    pub fn total_impact(&self, ingredients: &[String], plan: &PortionPlan) -> ClimateTotals {
        let impacts: Vec<(f64, f64, f64)> = ingredients
            .par_iter()
            .enumerate()
            .map(|(index, ingredient)| {
                let grams = plan.grams(index);
                self.ingredient_impact(ingredient, grams).map_or_else(
                    || {
                        let factor = grams / NUTRITION_REFERENCE_GRAMS;
                        (
                            FALLBACK_CO2_KG * factor,
                            FALLBACK_WATER_L * factor,
                            FALLBACK_LAND_M2 * factor,
                        )
                    },
                    |impact| (impact.co2_kg, impact.water_l, impact.land_m2),
                )
            })
            .collect();

        let (co2, water, land) = impacts
            .into_iter()
            .fold((0.0, 0.0, 0.0), |(c, w, l), (ic, iw, il)| (c + ic, w + iw, l + il));

        ClimateTotals {
            total_co2: round_to(co2, 2),
            total_water: water.round(),
            total_land: round_to(land, 2),
        }
    }

    /// Mean biodiversity score over ingredients with a metric, 0 when none has one
    #[must_use]
    pub fn average_biodiversity(&self, ingredients: &[String]) -> f64 {
        let scores: Vec<f64> = ingredients
            .iter()
            .filter_map(|ingredient| self.category_factors(climate_category_for(ingredient)))
            .map(|factors| factors.biodiversity)
            .collect();
        if scores.is_empty() {
            return 0.0;
        }
        let count = scores.len() as f64;
        round_to(scores.iter().sum::<f64>() / count, 2)
    }

    /// Original totals against vegan totals plus supplement impact
    #[must_use]
    pub fn compare(
        &self,
        original: &[String],
        vegan: &[String],
        supplements: &[Supplement],
        plan: &PortionPlan,
    ) -> ClimateComparison {
        let original_totals = self.total_impact(original, plan);
        let base_vegan = self.total_impact(vegan, plan);
        let supplement_totals = supplement_impact(supplements);

        let vegan_totals = ClimateTotals {
            total_co2: round_to(base_vegan.total_co2 + supplement_totals.total_co2, 2),
            total_water: (base_vegan.total_water + supplement_totals.total_water).round(),
            total_land: round_to(base_vegan.total_land + supplement_totals.total_land, 2),
        };

        let comparison = ClimateComparison {
            co2_reduction: reduction_percentage(
                original_totals.total_co2,
                vegan_totals.total_co2,
                FALLBACK_CO2_REDUCTION,
            ),
            water_saving: reduction_percentage(
                original_totals.total_water,
                vegan_totals.total_water,
                FALLBACK_WATER_SAVING,
            ),
            land_saving: reduction_percentage(
                original_totals.total_land,
                vegan_totals.total_land,
                FALLBACK_LAND_SAVING,
            ),
            details: ClimateDetails {
                original: original_totals,
                vegan: vegan_totals,
                supplements: supplement_totals,
            },
        };

        if comparison.details.original.total_co2 <= 0.0 && !original.is_empty() {
            warn!("Original recipe has no CO2 footprint, using fallback reduction");
        }
        comparison
    }
}

/// Summed per-serving impact of supplements, missing values count as 0
#[must_use]
pub fn supplement_impact(supplements: &[Supplement]) -> ClimateTotals {
    let (co2, water, land) = supplements.iter().fold((0.0, 0.0, 0.0), |(c, w, l), s| {
        (
            c + s.co2_kg_per_serving.unwrap_or(0.0),
            w + s.water_l_per_serving.unwrap_or(0.0),
            l + s.land_m2_per_serving.unwrap_or(0.0),
        )
    });
    ClimateTotals {
        total_co2: round_to(co2, 2),
        total_water: water.round(),
        total_land: round_to(land, 2),
    }
}

fn scaled_impact(factors: ClimateFactors, grams: f64) -> IngredientImpact {
    let kg = grams / GRAMS_PER_KG;
    IngredientImpact {
        co2_kg: round_to(factors.co2_kg * kg, 2),
        water_l: (factors.water_l * kg).round(),
        land_m2: round_to(factors.land_m2 * kg, 2),
        biodiversity_score: round_to(factors.biodiversity, 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veganizer_core::models::{SupplementKind, SupplementPriority};

    fn metric(category: &str, co2: f64, water: f64, land: f64, bio: f64) -> ClimateMetric {
        ClimateMetric::new(
            category,
            ClimateFactors {
                co2_kg: co2,
                water_l: water,
                land_m2: land,
                biodiversity: bio,
            },
        )
    }

    fn calculator() -> ClimateCalculator {
        ClimateCalculator::new(vec![
            metric("beef", 60.0, 15_400.0, 164.0, 0.9),
            metric("seitan", 2.5, 300.0, 2.0, 0.2),
            metric("vegetables", 0.5, 320.0, 0.4, 0.1),
            metric("milk", 3.2, 628.0, 9.0, 0.4),
        ])
    }

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn test_category_mapping() {
        assert_eq!(climate_category_for("Bœuf"), "beef");
        assert_eq!(climate_category_for("oeufs"), "eggs");
        assert_eq!(climate_category_for("Pois chiches"), "chickpeas");
        assert_eq!(climate_category_for("blanc de poulet"), "chicken");
        assert_eq!(climate_category_for("crème fraîche"), "milk");
        assert_eq!(climate_category_for("courgette"), "vegetables");
        assert_eq!(climate_category_for(""), "vegetables");
    }

    #[test]
    fn test_ingredient_impact_scales_with_portion() {
        let calc = calculator();
        let impact = calc.ingredient_impact("boeuf", 100.0).unwrap();
        assert!((impact.co2_kg - 6.0).abs() < 1e-9);
        assert!((impact.water_l - 1540.0).abs() < 1e-9);
        assert!((impact.land_m2 - 16.4).abs() < 1e-9);

        let double = calc.ingredient_impact("boeuf", 200.0).unwrap();
        assert!((double.co2_kg - 12.0).abs() < 1e-9);
        assert!(calc.ingredient_impact("tofu", 100.0).is_none());
    }

    #[test]
    fn test_missing_metric_uses_fallback() {
        let calc = ClimateCalculator::default();
        let totals = calc.total_impact(&names(&["tofu", "riz"]), &PortionPlan::default());
        assert!((totals.total_co2 - 4.0).abs() < 1e-9);
        assert!((totals.total_water - 100.0).abs() < 1e-9);
        assert!((totals.total_land - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_compare_adds_supplements_to_vegan_side() {
        let calc = calculator();
        let mut b12 = Supplement::new(
            "Vitamine B12 Vegan",
            SupplementKind::Vitamin,
            SupplementPriority::Critical,
        );
        b12.co2_kg_per_serving = Some(0.05);

        let comparison = calc.compare(
            &names(&["boeuf"]),
            &names(&["seitan"]),
            &[b12],
            &PortionPlan::default(),
        );
        assert!((comparison.details.vegan.total_co2 - 0.3).abs() < 1e-9);
        assert!((comparison.details.supplements.total_co2 - 0.05).abs() < 1e-9);
        assert_eq!(comparison.co2_reduction, 95);
    }

    #[test]
    fn test_empty_original_uses_fallback_reductions() {
        let calc = calculator();
        let comparison = calc.compare(&[], &names(&["seitan"]), &[], &PortionPlan::default());
        assert_eq!(comparison.co2_reduction, 65);
        assert_eq!(comparison.water_saving, 78);
        assert_eq!(comparison.land_saving, 83);
    }

    #[test]
    fn test_vegan_alternative_impact() {
        let calc = calculator();
        let impact = calc.vegan_alternative_impact("boeuf").unwrap();
        assert!((impact.co2_kg - 0.25).abs() < 1e-9);
        assert!(calc.vegan_alternative_impact("courgette").is_none());
    }

    #[test]
    fn test_average_biodiversity() {
        let calc = calculator();
        assert!((calc.average_biodiversity(&names(&["boeuf", "lait"])) - 0.65).abs() < 1e-9);
        assert!(calc.average_biodiversity(&[]).abs() < f64::EPSILON);
    }
}

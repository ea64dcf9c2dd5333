// ABOUTME: Property checks run over every built-in recipe and ingredient name
// ABOUTME: Slot preservation, bounded reductions, normalizer idempotence and keyword safety
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

mod common;

use common::conversion_service;
use veganizer::database::ReferenceData;
use veganizer_intelligence::{
    animal_product_for, normalize, substitution_key, NormalizeMode, NutritionCalculator,
    PortionPlan,
};

fn every_ingredient_name(data: &ReferenceData) -> Vec<String> {
    let slots = data
        .recipes
        .iter()
        .flat_map(|recipe| recipe.slots.iter())
        .flat_map(|slot| [slot.original.clone(), slot.vegan.clone()])
        .flatten();
    let rules = data
        .substitutions
        .iter()
        .flat_map(|rule| [rule.original_ingredient.clone(), rule.vegan_substitute.clone()]);
    slots.chain(rules).collect()
}

#[tokio::test]
async fn test_every_builtin_recipe_converts_consistently() {
    let service = conversion_service();

    for recipe in ReferenceData::builtin().recipes {
        let result = service.convert_recipe(&recipe.name).await.unwrap();
        let name = &recipe.name;

        assert!(!result.generated_from_template, "{name}");
        assert_eq!(
            result.original_recipe.ingredients,
            recipe.original_ingredients(),
            "{name}"
        );
        assert_eq!(
            result.vegan_recipe.ingredients.len(),
            result.original_recipe.ingredients.len(),
            "{name}"
        );
        assert!(result.substitution_count <= result.vegan_recipe.ingredients.len());
        assert_eq!(result.shopping_list.len(), result.vegan_recipe.ingredients.len());

        let climate = &result.climate_comparison;
        for reduction in [climate.co2_reduction, climate.water_saving, climate.land_saving] {
            assert!(reduction <= 100, "{name}: {reduction}");
        }
        assert!(result.animal_savings.total_animals >= 0.0);
    }
}

#[test]
fn test_normalization_is_idempotent_over_reference_names() {
    for name in every_ingredient_name(&ReferenceData::builtin()) {
        for mode in [NormalizeMode::Key, NormalizeMode::Strict] {
            let once = normalize(&name, mode);
            assert_eq!(normalize(&once, mode), once, "{name}");
        }
        let key = substitution_key(&name);
        assert_eq!(substitution_key(&key), key);
    }
}

#[test]
fn test_plant_ingredients_never_map_to_animal_products() {
    for ingredient in ["ail", "gousse d'ail", "pommes de terre", "lentilles", "farine"] {
        assert!(animal_product_for(ingredient).is_none(), "{ingredient}");
    }
    assert!(animal_product_for("blanc de volaille").is_some());
}

fn one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[test]
fn test_single_ingredient_aggregate_matches_its_record() {
    let data = ReferenceData::builtin();
    let calculator = NutritionCalculator::new(data.nutrition.clone());
    let plan = PortionPlan::uniform(100.0);
    let mut checked = 0;

    for record in &data.nutrition {
        // skip names that resolve to a different record
        if calculator.find(&record.name).map(|found| found.id) != Some(record.id) {
            continue;
        }
        let totals = calculator.aggregate(&[record.name.clone()], &plan);
        let value = |field: Option<f64>| field.unwrap_or(0.0);

        assert_eq!(totals.calories, value(record.calories).round(), "{}", record.name);
        assert_eq!(totals.proteins, value(record.proteins_g).round(), "{}", record.name);
        assert_eq!(totals.carbs, value(record.carbs_g).round(), "{}", record.name);
        assert_eq!(totals.fats, value(record.fats_g).round(), "{}", record.name);
        assert_eq!(totals.fiber, value(record.fiber_g).round(), "{}", record.name);
        assert_eq!(totals.calcium, value(record.calcium_mg).round(), "{}", record.name);
        assert_eq!(totals.iron, one_decimal(value(record.iron_mg)), "{}", record.name);
        assert_eq!(totals.zinc, one_decimal(value(record.zinc_mg)), "{}", record.name);
        checked += 1;
    }

    assert!(checked * 2 >= data.nutrition.len(), "only {checked} records resolved to themselves");
}

// ABOUTME: Integration tests for the conversion orchestrator over the built-in dataset
// ABOUTME: Covers stored and generic conversions, name matching, supplements and degraded stores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

mod common;

use common::{conversion_service, nutrition_record, repositories, FailingStore};
use veganizer::database::{ReferenceData, Repositories};
use veganizer::errors::ErrorCode;
use veganizer::services::ConversionService;
use veganizer_core::constants::recipes::GENERIC_TEMPLATE;
use veganizer_core::constants::supplements::{B12, IRON};
use veganizer_core::models::{Recipe, RecipeSlot};
use veganizer_intelligence::PortionPlan;

#[tokio::test]
async fn test_stored_recipe_uses_slot_replacements() {
    let result = conversion_service()
        .convert_recipe("Bœuf bourguignon")
        .await
        .unwrap();

    assert!(!result.generated_from_template);
    assert_eq!(result.original_recipe.name, "Bœuf bourguignon");
    assert_eq!(result.original_recipe.cooking_time, "3h");
    assert_eq!(result.vegan_recipe.name, "Bourguignon de seitan");
    assert_eq!(result.vegan_recipe.difficulty, "Facile");
    assert_eq!(
        result.vegan_recipe.ingredient_names(),
        vec!["seitan", "tofu fumé", "vin rouge", "carottes", "champignons", "oignons"]
    );

    // vin rouge is flagged already vegan, the vegetables have no rule
    assert_eq!(result.substitution_count, 2);
    let wine = &result.vegan_recipe.ingredients[2];
    assert!(!wine.is_substituted);
    assert!(wine.substitution.is_none());
    assert_eq!(
        result.vegan_recipe.ingredients[0].substitution.as_deref(),
        Some("remplace bœuf")
    );
}

#[tokio::test]
async fn test_missing_metadata_uses_defaults() {
    let result = conversion_service()
        .convert_recipe("Saumon en papillote")
        .await
        .unwrap();

    assert_eq!(result.original_recipe.cooking_time, "2h");
    assert_eq!(result.original_recipe.servings, 6);
    assert_eq!(result.original_recipe.difficulty, "Moyen");
    assert_eq!(result.vegan_recipe.name, "Saumon en papillote (Version Végane)");
    assert_eq!(result.vegan_recipe.cooking_time, "1h45");
    assert_eq!(result.vegan_recipe.servings, 6);
}

#[tokio::test]
async fn test_empty_slots_are_dropped() {
    let result = conversion_service()
        .convert_recipe("Poulet basquaise")
        .await
        .unwrap();

    assert_eq!(result.original_recipe.ingredients.len(), 5);
    assert_eq!(result.vegan_recipe.ingredients.len(), 5);
    assert_eq!(result.vegan_recipe.ingredients[0].name, "tofu ou morceaux de soja");
    assert_eq!(result.original_recipe.servings, 4);
}

#[tokio::test]
async fn test_recipe_names_match_after_normalization() {
    let service = conversion_service();
    let shouted = service.convert_recipe("BŒUF Bourguignon").await.unwrap();
    let plain = service.convert_recipe("boeuf bourguignon").await.unwrap();

    assert_eq!(shouted.original_recipe, plain.original_recipe);
    assert_eq!(shouted.vegan_recipe, plain.vegan_recipe);
    assert!(!shouted.generated_from_template);
}

#[tokio::test]
async fn test_partial_name_matches_stored_recipe() {
    let result = conversion_service().convert_recipe("quiche").await.unwrap();

    assert_eq!(result.original_recipe.name, "Quiche lorraine");
    assert_eq!(result.vegan_recipe.name, "Quiche végétale au tofu fumé");
    assert_eq!(result.substitution_count, 5);
}

#[tokio::test]
async fn test_unknown_recipe_uses_generic_template() {
    let result = conversion_service()
        .convert_recipe("Tarte aux pommes")
        .await
        .unwrap();

    assert!(result.generated_from_template);
    assert_eq!(result.original_recipe.name, "Tarte aux pommes");
    assert_eq!(result.original_recipe.ingredients, GENERIC_TEMPLATE.to_vec());
    assert_eq!(result.original_recipe.servings, 4);
    assert_eq!(result.vegan_recipe.servings, 4);
    assert_eq!(result.vegan_recipe.name, "Tarte aux pommes (Version Végane)");
    assert_eq!(result.vegan_recipe.ingredients.len(), 5);

    // "viande principale" contains the "viande" rule
    assert_eq!(result.vegan_recipe.ingredients[0].name, "haché végétal");
    assert_eq!(result.substitution_count, 1);

    assert_eq!(result.shopping_list.len(), 5);
    assert!((result.shopping_list.estimated_cost - 17.5).abs() < 1e-9);
    assert!((result.shopping_list.savings - 4.38).abs() < 1e-9);
}

#[tokio::test]
async fn test_blank_name_is_rejected() {
    let error = conversion_service().convert_recipe("   ").await.unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_climate_reductions_are_finite() {
    let result = conversion_service()
        .convert_recipe("Bœuf bourguignon")
        .await
        .unwrap();
    let climate = &result.climate_comparison;

    assert!(climate.co2_reduction > 0 && climate.co2_reduction <= 100);
    assert!(climate.water_saving <= 100);
    assert!(climate.land_saving <= 100);
    assert!(climate.details.original.total_co2.is_finite());
    assert!(climate.details.original.total_co2 > climate.details.vegan.total_co2);
}

#[tokio::test]
async fn test_animals_come_from_original_ingredients() {
    let result = conversion_service()
        .convert_recipe("Bœuf bourguignon")
        .await
        .unwrap();
    let details = &result.animal_savings.details;

    assert_eq!(details.len(), 2);
    assert_eq!(details[0].ingredient, "bœuf");
    assert_eq!(details[1].ingredient, "lardons");
}

#[tokio::test]
async fn test_iron_supplement_added_on_deficiency() {
    let builtin = ReferenceData::builtin();
    let data = ReferenceData {
        recipes: vec![Recipe::new(
            "Poêlée de tofu",
            vec![RecipeSlot::with_vegan("poulet", "tofu nature")],
        )],
        nutrition: vec![
            nutrition_record("Poulet, viande, crue", 0.7, 21.0),
            nutrition_record("Tofu nature", 1.5, 12.0),
        ],
        supplements: builtin.supplements,
        ..ReferenceData::default()
    };
    let service = ConversionService::new(repositories(data));

    let result = service.convert_recipe("Poêlée de tofu").await.unwrap();
    let nutrition = &result.nutrition_comparison;
    let names: Vec<&str> = nutrition.supplements.iter().map(|s| s.name.as_str()).collect();

    assert_eq!(names[0], B12);
    assert!(names.contains(&IRON));
    assert!(nutrition.vegan.iron > 1.5);
    assert!(nutrition.supplement_contribution.iron > 0.0);
}

#[tokio::test]
async fn test_failing_store_degrades_to_template() {
    let service = ConversionService::new(Repositories::from_store(FailingStore));

    let result = service.convert_recipe("Bœuf bourguignon").await.unwrap();

    assert!(result.generated_from_template);
    assert_eq!(result.substitution_count, 0);
    assert!(result.nutrition_comparison.supplements.is_empty());
    assert_eq!(result.climate_comparison.details.supplements.total_co2, 0.0);
    assert_eq!(result.animal_savings.total_animals, 0.0);
}

#[tokio::test]
async fn test_result_serializes_with_camel_case_keys() {
    let result = conversion_service()
        .convert_recipe("Quiche lorraine")
        .await
        .unwrap();
    let json = serde_json::to_value(&result).unwrap();

    for key in [
        "originalRecipe",
        "veganRecipe",
        "nutritionComparison",
        "climateComparison",
        "animalSavings",
        "shoppingList",
        "substitutionCount",
    ] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
}

#[tokio::test]
async fn test_search_recipes() {
    let service = conversion_service();

    let suggestions = service.search_recipes("bourgui").await;
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].name, "Bœuf bourguignon");
    assert_eq!(suggestions[0].description, "3h • 6 personnes • Moyen");

    assert!(service.search_recipes("q").await.is_empty());
}

#[tokio::test]
async fn test_single_ingredient_climate_helpers() {
    let service = conversion_service();

    let beef = service
        .ingredient_climate_impact("bœuf", 100.0)
        .await
        .unwrap();
    assert!((beef.co2_kg - 6.0).abs() < 1e-9);

    let alternative = service.vegan_alternative_impact("bœuf").await.unwrap();
    assert!(alternative.co2_kg < beef.co2_kg);

    assert!(service.vegan_alternative_impact("carottes").await.is_none());
}

#[tokio::test]
async fn test_climate_comparison_without_original_uses_fallbacks() {
    let comparison = conversion_service()
        .compare_climate_impact(&[], &["tofu".to_owned()], &[])
        .await;

    assert_eq!(comparison.co2_reduction, 65);
    assert_eq!(comparison.water_saving, 78);
    assert_eq!(comparison.land_saving, 83);
}

#[tokio::test]
async fn test_animals_saved_for_beef_counts_cows_only() {
    let savings = conversion_service()
        .calculate_animals_saved(&["bœuf".to_owned()], &["seitan".to_owned()], Some(&[250.0]))
        .await;

    assert!((savings.animal_breakdown.cows - 1.0).abs() < 1e-9);
    assert_eq!(savings.animal_breakdown.pigs, 0.0);
    assert_eq!(savings.animal_breakdown.chickens, 0.0);
    assert_eq!(savings.animal_breakdown.fish, 0.0);
    assert_eq!(savings.animal_breakdown.dairy_cows, 0.0);
    assert_eq!(savings.animal_breakdown.hens, 0.0);
    assert!((savings.total_animals - 1.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_empty_animal_input_is_zero() {
    let savings = conversion_service()
        .calculate_animals_saved(&[], &[], None)
        .await;

    assert_eq!(savings.total_animals, 0.0);
    assert_eq!(savings.life_years_saved, 0.0);
    assert!(savings.details.is_empty());
}

#[tokio::test]
async fn test_portion_plan_scales_animal_quantities() {
    let service = conversion_service().with_portion_plan(PortionPlan::uniform(200.0));

    let result = service.convert_recipe("Bœuf bourguignon").await.unwrap();
    let savings = &result.animal_savings;

    assert_eq!(savings.details.len(), 2);
    for detail in &savings.details {
        assert!((detail.quantity_kg - 0.2).abs() < 1e-9, "{}", detail.ingredient);
    }

    let original = &result.original_recipe.ingredients;
    let quantities = vec![0.2; original.len()];
    let expected = service
        .calculate_animals_saved(original, &[], Some(quantities.as_slice()))
        .await;
    assert_eq!(*savings, expected);

    // 0.2 kg beef and lardons: (0.0008 cows × 18 y) + (0.0022 pigs × 14.5 y)
    assert!((savings.life_years_saved - 0.05).abs() < 1e-9);
    let default_plan = conversion_service()
        .convert_recipe("Bœuf bourguignon")
        .await
        .unwrap();
    assert!((default_plan.animal_savings.life_years_saved - 0.02).abs() < 1e-9);
}

#[tokio::test]
async fn test_repeated_conversion_serializes_identically() {
    let service = conversion_service();

    let first = service.convert_recipe("Quiche lorraine").await.unwrap();
    let second = service.convert_recipe("Quiche lorraine").await.unwrap();

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

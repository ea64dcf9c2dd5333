// ABOUTME: Conversion orchestrator turning a recipe name into a full vegan comparison
// ABOUTME: Resolves substitutions, then runs nutrition, climate and animal scoring concurrently
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Conversion Orchestrator
//!
//! A known recipe (exact normalized name, else the first stored name that
//! contains the query) is converted slot by slot. An unknown name goes
//! through the same pipeline with a generic five-ingredient template.

use tracing::{debug, info, instrument, warn};
use veganizer_core::constants::recipes::{
    DEFAULT_SERVINGS, GENERIC_SERVINGS, GENERIC_TEMPLATE, ORIGINAL_COOKING_TIME,
    ORIGINAL_DIFFICULTY, VEGAN_COOKING_TIME, VEGAN_DIFFICULTY, VEGAN_NAME_SUFFIX,
};
use veganizer_core::models::{
    AnimalSavings, ClimateComparison, ConversionResult, IngredientImpact, NutritionComparison,
    OriginalRecipe, Recipe, RecipeSlot, RecipeSuggestion, Supplement, VeganRecipe,
};
use veganizer_intelligence::{
    build_shopping_list, suggestion_for, AnimalCalculator, ClimateCalculator, NutritionCalculator,
    PortionPlan, RecipeMatcher, SubstitutionResolver,
};

use super::load_or_empty;
use crate::database::Repositories;
use crate::errors::{AppError, AppResult};

/// Converts recipes and scores the conversion
#[derive(Clone)]
pub struct ConversionService {
    repos: Repositories,
    portion_plan: PortionPlan,
}

impl ConversionService {
    /// Service with the default 100 g portion per ingredient
    #[must_use]
    pub fn new(repos: Repositories) -> Self {
        Self {
            repos,
            portion_plan: PortionPlan::default(),
        }
    }

    /// Replace the portion plan used for nutrition, climate and animal totals
    #[must_use]
    pub fn with_portion_plan(mut self, portion_plan: PortionPlan) -> Self {
        self.portion_plan = portion_plan;
        self
    }

    /// Portion plan in use
    #[must_use]
    pub const fn portion_plan(&self) -> &PortionPlan {
        &self.portion_plan
    }

    /// Convert `name` into a vegan recipe with nutrition, climate and animal scoring
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::InvalidInput` if `name` is blank. Lookup misses
    /// and store failures never fail the conversion.
    #[instrument(skip(self), fields(recipe = %name))]
    pub async fn convert_recipe(&self, name: &str) -> AppResult<ConversionResult> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::invalid_input("Recipe name must not be empty"));
        }

        let (recipe, rules) = tokio::join!(
            self.find_recipe(name),
            load_or_empty("substitution_rules", self.repos.substitutions.list_all()),
        );
        let resolver = SubstitutionResolver::new(rules);

        let result = match recipe {
            Some(recipe) => {
                info!(matched = %recipe.name, "Converting stored recipe");
                self.convert_known(&recipe, &resolver).await
            }
            None => {
                info!("Recipe not found, converting generic template");
                self.convert_generic(name, &resolver).await
            }
        };

        info!(
            substitutions = result.substitution_count,
            co2_reduction = result.climate_comparison.co2_reduction,
            animals = result.animal_savings.total_animals,
            "Conversion complete"
        );
        Ok(result)
    }

    async fn find_recipe(&self, name: &str) -> Option<Recipe> {
        match self.repos.recipes.get_by_name(name).await {
            Ok(Some(recipe)) => return Some(recipe),
            Ok(None) => {}
            Err(e) => warn!(error = %e, "Recipe lookup failed, trying fuzzy match"),
        }

        let recipes = load_or_empty("recipes", self.repos.recipes.list_all()).await;
        RecipeMatcher::new(recipes).find(name).cloned()
    }

    async fn convert_known(
        &self,
        recipe: &Recipe,
        resolver: &SubstitutionResolver,
    ) -> ConversionResult {
        let slots: Vec<RecipeSlot> = recipe.filled_slots().cloned().collect();
        let servings = recipe.servings.filter(|s| *s > 0).unwrap_or(DEFAULT_SERVINGS);
        let cooking_time = recipe
            .cooking_time
            .as_deref()
            .filter(|time| !time.trim().is_empty());

        let original = OriginalRecipe {
            name: recipe.name.clone(),
            ingredients: recipe.original_ingredients(),
            cooking_time: cooking_time.unwrap_or(ORIGINAL_COOKING_TIME).to_owned(),
            servings,
            difficulty: recipe
                .difficulty
                .as_deref()
                .filter(|difficulty| !difficulty.trim().is_empty())
                .unwrap_or(ORIGINAL_DIFFICULTY)
                .to_owned(),
        };

        let vegan = VeganRecipe {
            name: recipe
                .vegan_name
                .as_deref()
                .filter(|vegan_name| !vegan_name.trim().is_empty())
                .map_or_else(|| format!("{}{VEGAN_NAME_SUFFIX}", recipe.name), str::to_owned),
            ingredients: resolver.resolve_slots(&slots),
            cooking_time: cooking_time.unwrap_or(VEGAN_COOKING_TIME).to_owned(),
            servings,
            difficulty: VEGAN_DIFFICULTY.to_owned(),
        };

        self.assemble(original, vegan, false).await
    }

    async fn convert_generic(
        &self,
        name: &str,
        resolver: &SubstitutionResolver,
    ) -> ConversionResult {
        let ingredients: Vec<String> = GENERIC_TEMPLATE.iter().map(|&i| i.to_owned()).collect();

        let vegan = VeganRecipe {
            name: format!("{name}{VEGAN_NAME_SUFFIX}"),
            ingredients: resolver.resolve_ingredients(&ingredients),
            cooking_time: VEGAN_COOKING_TIME.to_owned(),
            servings: GENERIC_SERVINGS,
            difficulty: VEGAN_DIFFICULTY.to_owned(),
        };

        let original = OriginalRecipe {
            name: name.to_owned(),
            ingredients,
            cooking_time: ORIGINAL_COOKING_TIME.to_owned(),
            servings: GENERIC_SERVINGS,
            difficulty: ORIGINAL_DIFFICULTY.to_owned(),
        };

        self.assemble(original, vegan, true).await
    }

    async fn assemble(
        &self,
        original: OriginalRecipe,
        vegan: VeganRecipe,
        generated_from_template: bool,
    ) -> ConversionResult {
        let vegan_names = vegan.ingredient_names();
        let quantities: Vec<f64> = (0..original.ingredients.len())
            .map(|index| self.portion_plan.kilograms(index))
            .collect();

        let ((nutrition_comparison, climate_comparison), animal_savings) = tokio::join!(
            self.nutrition_and_climate(&original.ingredients, &vegan_names),
            self.calculate_animals_saved(
                &original.ingredients,
                &vegan_names,
                Some(quantities.as_slice()),
            ),
        );

        let shopping_list = build_shopping_list(&vegan_names);
        let substitution_count = vegan
            .ingredients
            .iter()
            .filter(|ingredient| ingredient.is_substituted)
            .count();

        ConversionResult {
            original_recipe: original,
            vegan_recipe: vegan,
            nutrition_comparison,
            climate_comparison,
            animal_savings,
            shopping_list,
            substitution_count,
            generated_from_template,
        }
    }

    /// Climate needs the supplements the nutrition comparison selects
    async fn nutrition_and_climate(
        &self,
        original: &[String],
        vegan: &[String],
    ) -> (NutritionComparison, ClimateComparison) {
        let (records, catalog, metrics) = tokio::join!(
            load_or_empty("nutrition_records", self.repos.nutrition.list_all()),
            load_or_empty("supplements", self.repos.supplements.list_all()),
            load_or_empty("climate_metrics", self.repos.climate.list_all()),
        );

        let nutrition = NutritionCalculator::new(records).compare(
            original,
            vegan,
            &self.portion_plan,
            &catalog,
        );
        debug!(
            supplements = nutrition.supplements.len(),
            "Nutrition comparison ready"
        );

        let climate = ClimateCalculator::new(metrics).compare(
            original,
            vegan,
            &nutrition.supplements,
            &self.portion_plan,
        );
        (nutrition, climate)
    }

    /// Animals spared by replacing `original` with `vegan`
    ///
    /// `quantities` holds kilograms per original ingredient; missing entries
    /// count as 0.1 kg. Only the original side is scored.
    pub async fn calculate_animals_saved(
        &self,
        original: &[String],
        vegan: &[String],
        quantities: Option<&[f64]>,
    ) -> AnimalSavings {
        debug!(
            original = original.len(),
            vegan = vegan.len(),
            "Calculating animals saved"
        );
        let records = load_or_empty("animal_impacts", self.repos.animal_impacts.list_all()).await;
        AnimalCalculator::new(records).calculate(original, quantities)
    }

    /// Climate footprint of `original` against `vegan` plus `supplements`
    pub async fn compare_climate_impact(
        &self,
        original: &[String],
        vegan: &[String],
        supplements: &[Supplement],
    ) -> ClimateComparison {
        let metrics = load_or_empty("climate_metrics", self.repos.climate.list_all()).await;
        ClimateCalculator::new(metrics).compare(original, vegan, supplements, &self.portion_plan)
    }

    /// Impact of `grams` of one ingredient, `None` without a complete metric
    pub async fn ingredient_climate_impact(
        &self,
        ingredient: &str,
        grams: f64,
    ) -> Option<IngredientImpact> {
        let metrics = load_or_empty("climate_metrics", self.repos.climate.list_all()).await;
        ClimateCalculator::new(metrics).ingredient_impact(ingredient, grams)
    }

    /// Impact of 100 g of the plant alternative to an animal ingredient
    pub async fn vegan_alternative_impact(&self, original: &str) -> Option<IngredientImpact> {
        let metrics = load_or_empty("climate_metrics", self.repos.climate.list_all()).await;
        ClimateCalculator::new(metrics).vegan_alternative_impact(original)
    }

    /// Up to ten suggestions for recipes whose name contains `query`
    ///
    /// Queries shorter than two characters return nothing.
    pub async fn search_recipes(&self, query: &str) -> Vec<RecipeSuggestion> {
        let recipes = load_or_empty("recipes", self.repos.recipes.list_all()).await;
        let matcher = RecipeMatcher::new(recipes);
        matcher.search(query).into_iter().map(suggestion_for).collect()
    }
}

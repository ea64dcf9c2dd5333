// ABOUTME: Composite conversion result returned for one recipe request
// ABOUTME: Original and vegan recipes, nutrition comparison, shopping list and impact figures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::animal::AnimalSavings;
use super::climate::ClimateComparison;
use super::nutrition::NutritionTotals;
use super::supplement::Supplement;

/// The recipe as requested
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OriginalRecipe {
    /// Recipe name
    pub name: String,
    /// Original ingredients, empty slots dropped
    pub ingredients: Vec<String>,
    /// Cooking time
    pub cooking_time: String,
    /// Servings
    pub servings: u32,
    /// Difficulty
    pub difficulty: String,
}

/// One ingredient of the vegan recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VeganIngredient {
    /// Ingredient to buy
    pub name: String,
    /// "remplace <original>" when substituted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub substitution: Option<String>,
    /// The original ingredient was replaced
    pub is_substituted: bool,
}

/// The converted recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VeganRecipe {
    /// Recipe name
    pub name: String,
    /// Ingredients with substitution annotations, same order as the original
    pub ingredients: Vec<VeganIngredient>,
    /// Cooking time
    pub cooking_time: String,
    /// Servings
    pub servings: u32,
    /// Difficulty
    pub difficulty: String,
}

impl VeganRecipe {
    /// Names of the vegan ingredients, in order
    #[must_use]
    pub fn ingredient_names(&self) -> Vec<String> {
        self.ingredients.iter().map(|i| i.name.clone()).collect()
    }
}

/// Original versus vegan nutrition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionComparison {
    /// Original recipe totals
    pub original: NutritionTotals,
    /// Vegan recipe totals including supplement contributions
    pub vegan: NutritionTotals,
    /// Recommended supplements
    pub supplements: Vec<Supplement>,
    /// What the supplements add
    pub supplement_contribution: NutritionTotals,
}

/// Vegan ingredients grouped by store aisle, with a cost estimate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingList {
    /// Fruits and vegetables
    pub fruits_vegetables: Vec<String>,
    /// Plant proteins
    pub proteins: Vec<String>,
    /// Everything else
    pub dry_goods: Vec<String>,
    /// Plant-based dairy alternatives
    pub alternatives: Vec<String>,
    /// Estimated basket cost (EUR)
    pub estimated_cost: f64,
    /// Estimated savings versus an omnivorous basket (EUR)
    pub savings: f64,
}

impl ShoppingList {
    /// Number of listed items
    #[must_use]
    pub fn len(&self) -> usize {
        self.fruits_vegetables.len()
            + self.proteins.len()
            + self.dry_goods.len()
            + self.alternatives.len()
    }

    /// No item listed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Complete comparison for one recipe
///
/// The same request against the same reference data always yields the same
/// value; timestamps belong to whoever records the result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    /// Recipe as requested
    pub original_recipe: OriginalRecipe,
    /// Converted recipe
    pub vegan_recipe: VeganRecipe,
    /// Nutrition comparison
    pub nutrition_comparison: NutritionComparison,
    /// Climate comparison
    pub climate_comparison: ClimateComparison,
    /// Animals spared
    pub animal_savings: AnimalSavings,
    /// Shopping list for the vegan recipe
    pub shopping_list: ShoppingList,
    /// Ingredients actually replaced
    pub substitution_count: usize,
    /// The recipe was missing from the store and a generic template was used
    pub generated_from_template: bool,
}

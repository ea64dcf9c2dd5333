// ABOUTME: Recipe name matching and search suggestions over a recipe snapshot
// ABOUTME: Exact normalized lookup with a containment fallback and capped search results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use veganizer_core::constants::search::{
    MIN_QUERY_CHARS, RESULT_LIMIT, UNKNOWN_COOKING_TIME, UNKNOWN_DIFFICULTY, UNKNOWN_SERVINGS,
};
use veganizer_core::models::{Recipe, RecipeSuggestion};

use crate::normalize::{normalize, NormalizeMode};

/// Lookup key for a recipe name
#[must_use]
pub fn recipe_key(name: &str) -> String {
    normalize(name, NormalizeMode::Key)
}

/// Finds recipes by name, ordered by normalized name for stable results
#[derive(Debug, Clone, Default)]
pub struct RecipeMatcher {
    recipes: Vec<(String, Recipe)>,
}

impl RecipeMatcher {
    /// Index recipes by normalized name
    #[must_use]
    pub fn new(recipes: Vec<Recipe>) -> Self {
        let mut indexed: Vec<(String, Recipe)> = recipes
            .into_iter()
            .map(|recipe| (recipe_key(&recipe.name), recipe))
            .filter(|(key, _)| !key.is_empty())
            .collect();
        indexed.sort_by(|(a, _), (b, _)| a.cmp(b));
        Self { recipes: indexed }
    }

    /// Number of indexed recipes
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// No recipe indexed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Recipe for `name`: exact normalized name, else the first name containing it
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Recipe> {
        let key = recipe_key(name);
        if key.is_empty() {
            return None;
        }
        self.recipes
            .iter()
            .find(|(candidate, _)| *candidate == key)
            .or_else(|| {
                self.recipes
                    .iter()
                    .find(|(candidate, _)| candidate.contains(key.as_str()))
            })
            .map(|(_, recipe)| recipe)
    }

    /// Up to ten recipes whose name contains `query`
    ///
    /// Queries shorter than two characters return nothing.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Recipe> {
        let key = recipe_key(query);
        if key.chars().count() < MIN_QUERY_CHARS {
            return Vec::new();
        }
        self.recipes
            .iter()
            .filter(|(candidate, _)| candidate.contains(key.as_str()))
            .map(|(_, recipe)| recipe)
            .take(RESULT_LIMIT)
            .collect()
    }
}

/// Search suggestion: "time • N personnes • difficulty"
#[must_use]
pub fn suggestion_for(recipe: &Recipe) -> RecipeSuggestion {
    let cooking_time = recipe
        .cooking_time
        .as_deref()
        .filter(|time| !time.trim().is_empty())
        .unwrap_or(UNKNOWN_COOKING_TIME);
    let servings = recipe
        .servings
        .filter(|servings| *servings > 0)
        .unwrap_or(UNKNOWN_SERVINGS);
    let difficulty = recipe
        .difficulty
        .as_deref()
        .filter(|difficulty| !difficulty.trim().is_empty())
        .unwrap_or(UNKNOWN_DIFFICULTY);

    RecipeSuggestion {
        name: recipe.name.clone(),
        description: format!("{cooking_time} • {servings} personnes • {difficulty}"),
    }
}

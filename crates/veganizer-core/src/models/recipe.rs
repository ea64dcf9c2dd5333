// ABOUTME: Recipe models with positional ingredient slots and menu items
// ABOUTME: Recipe, RecipeSlot, RecipeSuggestion and MenuItem definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::recipes::MAX_INGREDIENT_SLOTS;

/// One positional ingredient slot of a stored recipe
///
/// Slots are sparse: any slot may lack an original ingredient, and the vegan
/// ingredient is only authoritative when present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSlot {
    /// Original (possibly animal-derived) ingredient
    #[serde(default)]
    pub original: Option<String>,
    /// Precomputed vegan replacement for this slot
    #[serde(default)]
    pub vegan: Option<String>,
    /// The original ingredient is already vegan
    #[serde(default)]
    pub already_vegan: bool,
}

impl RecipeSlot {
    /// Slot with only an original ingredient
    pub fn original(name: impl Into<String>) -> Self {
        Self {
            original: Some(name.into()),
            ..Self::default()
        }
    }

    /// Slot with an original ingredient and its stored vegan replacement
    pub fn with_vegan(original: impl Into<String>, vegan: impl Into<String>) -> Self {
        Self {
            original: Some(original.into()),
            vegan: Some(vegan.into()),
            already_vegan: false,
        }
    }

    /// Mark the original ingredient as already vegan
    #[must_use]
    pub const fn already_vegan(mut self) -> Self {
        self.already_vegan = true;
        self
    }

    /// Original ingredient, if the slot holds a non-blank one
    #[must_use]
    pub fn original_name(&self) -> Option<&str> {
        self.original
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    /// Stored vegan ingredient, if non-blank
    #[must_use]
    pub fn vegan_name(&self) -> Option<&str> {
        self.vegan
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

/// A stored recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique identifier
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Recipe name as displayed
    pub name: String,
    /// Ordered ingredient slots, at most six are considered
    #[serde(default)]
    pub slots: Vec<RecipeSlot>,
    /// Name of the stored vegan equivalent
    #[serde(default)]
    pub vegan_name: Option<String>,
    /// Cooking time, free text ("2h30")
    #[serde(default)]
    pub cooking_time: Option<String>,
    /// Number of servings
    #[serde(default)]
    pub servings: Option<u32>,
    /// Difficulty label
    #[serde(default)]
    pub difficulty: Option<String>,
}

impl Recipe {
    /// Create a recipe with the given slots and no metadata
    pub fn new(name: impl Into<String>, slots: Vec<RecipeSlot>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            slots,
            vegan_name: None,
            cooking_time: None,
            servings: None,
            difficulty: None,
        }
    }

    /// Slots that carry an original ingredient, in positional order
    pub fn filled_slots(&self) -> impl Iterator<Item = &RecipeSlot> {
        self.slots
            .iter()
            .take(MAX_INGREDIENT_SLOTS)
            .filter(|slot| slot.original_name().is_some())
    }

    /// Original ingredient names, empty slots dropped
    #[must_use]
    pub fn original_ingredients(&self) -> Vec<String> {
        self.filled_slots()
            .filter_map(RecipeSlot::original_name)
            .map(str::to_owned)
            .collect()
    }
}

/// Search suggestion for a recipe name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSuggestion {
    /// Recipe name
    pub name: String,
    /// "time • N personnes • difficulty"
    pub description: String,
}

/// One recipe in a weekly menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Recipe name as requested
    pub recipe_name: String,
    /// Servings per occurrence, defaults to 1
    #[serde(default)]
    pub servings: Option<u32>,
}

impl MenuItem {
    /// Menu item with default servings
    pub fn new(recipe_name: impl Into<String>) -> Self {
        Self {
            recipe_name: recipe_name.into(),
            servings: None,
        }
    }

    /// Menu item with explicit servings
    #[must_use]
    pub const fn with_servings(mut self, servings: u32) -> Self {
        self.servings = Some(servings);
        self
    }
}

// ABOUTME: Substitution rule model mapping animal ingredients to plant-based replacements
// ABOUTME: Carries the substitute name, quantity ratio, category and free-form notes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use uuid::Uuid;

const fn default_ratio() -> f64 {
    1.0
}

/// A substitution rule
///
/// Original ingredient names are unique under normalized comparison; the
/// repositories reject duplicates on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubstitutionRule {
    /// Unique identifier
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Animal-derived ingredient
    pub original_ingredient: String,
    /// Plant-based replacement
    pub vegan_substitute: String,
    /// Quantity of substitute per unit of original
    #[serde(default = "default_ratio")]
    pub substitution_ratio: f64,
    /// Grouping such as `produits_laitiers` or `viandes`
    #[serde(default)]
    pub category: Option<String>,
    /// Usage notes
    #[serde(default)]
    pub notes: Option<String>,
}

impl SubstitutionRule {
    /// Rule with a 1.0 ratio and no category
    pub fn new(original: impl Into<String>, substitute: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            original_ingredient: original.into(),
            vegan_substitute: substitute.into(),
            substitution_ratio: default_ratio(),
            category: None,
            notes: None,
        }
    }

    /// Set the quantity ratio
    #[must_use]
    pub const fn with_ratio(mut self, ratio: f64) -> Self {
        self.substitution_ratio = ratio;
        self
    }

    /// Set the category
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the notes
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

// ABOUTME: Animal impact models for animal products, species and savings breakdowns
// ABOUTME: AnimalProductType, AnimalType, AnimalImpactRecord and AnimalSavings definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Animal-derived product category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum AnimalProductType {
    /// Beef and veal
    Beef,
    /// Pork products
    Pork,
    /// Poultry
    Chicken,
    /// Fish and seafood
    Fish,
    /// Milk products
    Dairy,
    /// Eggs
    Eggs,
}

impl AnimalProductType {
    /// All product types
    pub const ALL: [Self; 6] = [
        Self::Beef,
        Self::Pork,
        Self::Chicken,
        Self::Fish,
        Self::Dairy,
        Self::Eggs,
    ];

    /// Stable string form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beef => "beef",
            Self::Pork => "pork",
            Self::Chicken => "chicken",
            Self::Fish => "fish",
            Self::Dairy => "dairy",
            Self::Eggs => "eggs",
        }
    }

    /// Parse from the stable string form
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == s)
    }
}

/// Species affected by an animal product
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AnimalType {
    /// Beef cattle
    Cow,
    /// Pigs
    Pig,
    /// Broiler chickens
    Chicken,
    /// Fish
    Fish,
    /// Dairy cows
    CowDairy,
    /// Laying hens
    Hen,
}

impl AnimalType {
    /// All animal types
    pub const ALL: [Self; 6] = [
        Self::Cow,
        Self::Pig,
        Self::Chicken,
        Self::Fish,
        Self::CowDairy,
        Self::Hen,
    ];

    /// Stable string form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cow => "cow",
            Self::Pig => "pig",
            Self::Chicken => "chicken",
            Self::Fish => "fish",
            Self::CowDairy => "cow_dairy",
            Self::Hen => "hen",
        }
    }

    /// Parse from the stable string form
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == s)
    }
}

/// Animals affected per kg of an animal product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimalImpactRecord {
    /// Product category
    pub product_type: AnimalProductType,
    /// Species affected
    pub animal_type: AnimalType,
    /// Animals killed (or fraction of a lifetime consumed) per kg
    pub animals_per_kg: f64,
    /// Average carcass weight (kg)
    #[serde(default)]
    pub average_weight_kg: Option<f64>,
    /// Natural lifespan (days)
    #[serde(default)]
    pub lifespan_days: Option<f64>,
    /// Age at slaughter (days)
    #[serde(default)]
    pub actual_age_days: Option<f64>,
    /// Data source
    #[serde(default)]
    pub data_source: Option<String>,
    /// Notes
    #[serde(default)]
    pub notes: Option<String>,
}

impl AnimalImpactRecord {
    /// Record with lifespan data
    #[must_use]
    pub const fn new(
        product_type: AnimalProductType,
        animal_type: AnimalType,
        animals_per_kg: f64,
        lifespan_days: Option<f64>,
        actual_age_days: Option<f64>,
    ) -> Self {
        Self {
            product_type,
            animal_type,
            animals_per_kg,
            average_weight_kg: None,
            lifespan_days,
            actual_age_days,
            data_source: None,
            notes: None,
        }
    }
}

/// Animals spared per species
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimalBreakdown {
    /// Beef cattle
    pub cows: f64,
    /// Pigs
    pub pigs: f64,
    /// Broiler chickens
    pub chickens: f64,
    /// Fish
    pub fish: f64,
    /// Dairy cows
    pub dairy_cows: f64,
    /// Laying hens
    pub hens: f64,
}

impl AnimalBreakdown {
    /// Mutable counter for an animal type
    pub fn slot_mut(&mut self, animal_type: AnimalType) -> &mut f64 {
        match animal_type {
            AnimalType::Cow => &mut self.cows,
            AnimalType::Pig => &mut self.pigs,
            AnimalType::Chicken => &mut self.chickens,
            AnimalType::Fish => &mut self.fish,
            AnimalType::CowDairy => &mut self.dairy_cows,
            AnimalType::Hen => &mut self.hens,
        }
    }

    /// Apply `f` to every counter
    #[must_use]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            cows: f(self.cows),
            pigs: f(self.pigs),
            chickens: f(self.chickens),
            fish: f(self.fish),
            dairy_cows: f(self.dairy_cows),
            hens: f(self.hens),
        }
    }
}

/// Contribution of one ingredient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimalDetail {
    /// Ingredient as supplied
    pub ingredient: String,
    /// Species affected
    pub animal_type: AnimalType,
    /// Animals affected, two decimals
    pub animal_count: f64,
    /// Product category
    pub product_type: AnimalProductType,
    /// Quantity considered (kg)
    pub quantity_kg: f64,
    /// Life-years saved, two decimals
    pub life_years_saved: f64,
}

/// Animals spared by a vegan conversion
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimalSavings {
    /// Total animals, two decimals
    pub total_animals: f64,
    /// Per-species breakdown, two decimals
    pub animal_breakdown: AnimalBreakdown,
    /// Total life-years saved, two decimals
    pub life_years_saved: f64,
    /// Per-ingredient details, in input order
    pub details: Vec<AnimalDetail>,
}

// ABOUTME: Nutrition models for Ciqual-style food records and aggregated totals
// ABOUTME: NutritionRecord (per 100 g, optional fields) and NutritionTotals definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};
use uuid::Uuid;

/// Nutrition facts per 100 g of a named food
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionRecord {
    /// Unique identifier
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Upstream food code
    #[serde(default)]
    pub code: Option<String>,
    /// Food name in French, as published
    pub name: String,
    /// Energy (kcal)
    #[serde(default)]
    pub calories: Option<f64>,
    /// Protein (g)
    #[serde(default)]
    pub proteins_g: Option<f64>,
    /// Carbohydrates (g)
    #[serde(default)]
    pub carbs_g: Option<f64>,
    /// Fat (g)
    #[serde(default)]
    pub fats_g: Option<f64>,
    /// Fiber (g)
    #[serde(default)]
    pub fiber_g: Option<f64>,
    /// Calcium (mg)
    #[serde(default)]
    pub calcium_mg: Option<f64>,
    /// Iron (mg)
    #[serde(default)]
    pub iron_mg: Option<f64>,
    /// Zinc (mg)
    #[serde(default)]
    pub zinc_mg: Option<f64>,
    /// Vitamin B12 (µg)
    #[serde(default)]
    pub vitamin_b12_ug: Option<f64>,
    /// Vitamin D (µg)
    #[serde(default)]
    pub vitamin_d_ug: Option<f64>,
}

impl NutritionRecord {
    /// Record with a name and no values
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Macro and mineral values as totals, missing fields counting as zero
    #[must_use]
    pub fn totals(&self) -> NutritionTotals {
        NutritionTotals {
            calories: self.calories.unwrap_or(0.0),
            proteins: self.proteins_g.unwrap_or(0.0),
            carbs: self.carbs_g.unwrap_or(0.0),
            fats: self.fats_g.unwrap_or(0.0),
            fiber: self.fiber_g.unwrap_or(0.0),
            calcium: self.calcium_mg.unwrap_or(0.0),
            iron: self.iron_mg.unwrap_or(0.0),
            zinc: self.zinc_mg.unwrap_or(0.0),
        }
    }
}

/// Aggregated nutrition values for a list of ingredients
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionTotals {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub proteins: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Fat (g)
    pub fats: f64,
    /// Fiber (g)
    pub fiber: f64,
    /// Calcium (mg)
    pub calcium: f64,
    /// Iron (mg)
    pub iron: f64,
    /// Zinc (mg)
    pub zinc: f64,
}

impl NutritionTotals {
    /// Multiply every value by `factor`
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            calories: self.calories * factor,
            proteins: self.proteins * factor,
            carbs: self.carbs * factor,
            fats: self.fats * factor,
            fiber: self.fiber * factor,
            calcium: self.calcium * factor,
            iron: self.iron * factor,
            zinc: self.zinc * factor,
        }
    }
}

impl Add for NutritionTotals {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            calories: self.calories + rhs.calories,
            proteins: self.proteins + rhs.proteins,
            carbs: self.carbs + rhs.carbs,
            fats: self.fats + rhs.fats,
            fiber: self.fiber + rhs.fiber,
            calcium: self.calcium + rhs.calcium,
            iron: self.iron + rhs.iron,
            zinc: self.zinc + rhs.zinc,
        }
    }
}

impl AddAssign for NutritionTotals {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

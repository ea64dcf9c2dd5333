// ABOUTME: Supplement model with per-serving nutrition and environmental impact
// ABOUTME: Supplement, SupplementKind and SupplementPriority definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::nutrition::NutritionTotals;

/// Kind of supplement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SupplementKind {
    /// Vitamin (B12, D3)
    Vitamin,
    /// Mineral (iron, zinc, calcium)
    Mineral,
    /// Algae-based omega-3
    Omega,
    /// Protein source (spirulina)
    Protein,
}

impl SupplementKind {
    /// Parse kind from string, unknown values map to `Vitamin`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "mineral" => Self::Mineral,
            "omega" | "omega3" => Self::Omega,
            "protein" => Self::Protein,
            _ => Self::Vitamin,
        }
    }

    /// Stable string form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vitamin => "vitamin",
            Self::Mineral => "mineral",
            Self::Omega => "omega",
            Self::Protein => "protein",
        }
    }
}

/// Recommendation priority tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum SupplementPriority {
    /// Needed by every vegan diet
    Critical,
    /// Needed when a deficiency is detected
    High,
    /// Optional
    Medium,
}

impl SupplementPriority {
    /// Parse priority from string, unknown values map to `Medium`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "critical" => Self::Critical,
            "high" => Self::High,
            _ => Self::Medium,
        }
    }

    /// Stable string form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
        }
    }
}

/// A supplement product, values per serving
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplement {
    /// Unique identifier
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Product name, used as lookup key
    pub name: String,
    /// Kind of supplement
    #[serde(rename = "type")]
    pub kind: SupplementKind,
    /// Priority tier
    pub priority: SupplementPriority,
    /// Serving description ("1 gélule")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serving_size: Option<String>,
    /// Affiliate purchase link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affiliate_link: Option<String>,
    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Energy (kcal)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    /// Protein (g)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proteins_g: Option<f64>,
    /// Carbohydrates (g)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs_g: Option<f64>,
    /// Fat (g)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fats_g: Option<f64>,
    /// Fiber (g)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber_g: Option<f64>,
    /// Calcium (mg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calcium_mg: Option<f64>,
    /// Iron (mg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iron_mg: Option<f64>,
    /// Zinc (mg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zinc_mg: Option<f64>,
    /// Vitamin B12 (µg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vitamin_b12_ug: Option<f64>,
    /// Omega-3 DHA (mg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub omega3_dha_mg: Option<f64>,
    /// Omega-3 EPA (mg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub omega3_epa_mg: Option<f64>,
    /// kg CO2e per serving
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub co2_kg_per_serving: Option<f64>,
    /// Liters of water per serving
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_l_per_serving: Option<f64>,
    /// m² of land per serving
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub land_m2_per_serving: Option<f64>,
    /// Biodiversity impact score
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biodiversity_impact: Option<f64>,
}

impl Supplement {
    /// Supplement with no nutrition or impact values
    pub fn new(
        name: impl Into<String>,
        kind: SupplementKind,
        priority: SupplementPriority,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            priority,
            serving_size: None,
            affiliate_link: None,
            description: None,
            calories: None,
            proteins_g: None,
            carbs_g: None,
            fats_g: None,
            fiber_g: None,
            calcium_mg: None,
            iron_mg: None,
            zinc_mg: None,
            vitamin_b12_ug: None,
            omega3_dha_mg: None,
            omega3_epa_mg: None,
            co2_kg_per_serving: None,
            water_l_per_serving: None,
            land_m2_per_serving: None,
            biodiversity_impact: None,
        }
    }

    /// Per-serving nutrition contribution, missing values counting as zero
    #[must_use]
    pub fn nutrition(&self) -> NutritionTotals {
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

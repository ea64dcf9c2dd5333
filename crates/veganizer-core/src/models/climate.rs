// ABOUTME: Climate impact models for product categories and recipe comparisons
// ABOUTME: ClimateMetric, ClimateFactors, IngredientImpact, ClimateTotals and ClimateComparison
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Stored per-kg impact of a canonical product category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimateMetric {
    /// Canonical category ("beef", "tofu", "vegetables")
    pub category: String,
    /// kg CO2e per kg
    #[serde(default)]
    pub co2_kg_per_kg: Option<f64>,
    /// Liters of water per kg
    #[serde(default)]
    pub water_l_per_kg: Option<f64>,
    /// m² of land per kg
    #[serde(default)]
    pub land_m2_per_kg: Option<f64>,
    /// Biodiversity impact score
    #[serde(default)]
    pub biodiversity_impact: Option<f64>,
}

impl ClimateMetric {
    /// Metric with every factor present
    pub fn new(category: impl Into<String>, factors: ClimateFactors) -> Self {
        Self {
            category: category.into(),
            co2_kg_per_kg: Some(factors.co2_kg),
            water_l_per_kg: Some(factors.water_l),
            land_m2_per_kg: Some(factors.land_m2),
            biodiversity_impact: Some(factors.biodiversity),
        }
    }

    /// Complete factors, or `None` when any value is missing
    #[must_use]
    pub fn factors(&self) -> Option<ClimateFactors> {
        Some(ClimateFactors {
            co2_kg: self.co2_kg_per_kg?,
            water_l: self.water_l_per_kg?,
            land_m2: self.land_m2_per_kg?,
            biodiversity: self.biodiversity_impact?,
        })
    }
}

/// Complete per-kg impact factors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClimateFactors {
    /// kg CO2e per kg
    pub co2_kg: f64,
    /// Liters of water per kg
    pub water_l: f64,
    /// m² of land per kg
    pub land_m2: f64,
    /// Biodiversity impact score
    pub biodiversity: f64,
}

/// Impact of one ingredient portion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IngredientImpact {
    /// kg CO2e, two decimals
    pub co2_kg: f64,
    /// Liters of water, whole liters
    pub water_l: f64,
    /// m² of land, two decimals
    pub land_m2: f64,
    /// Biodiversity score, two decimals
    pub biodiversity_score: f64,
}

/// Summed impact of an ingredient list
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClimateTotals {
    /// kg CO2e
    #[serde(rename = "totalCO2")]
    pub total_co2: f64,
    /// Liters of water
    pub total_water: f64,
    /// m² of land
    pub total_land: f64,
}

/// Totals behind a climate comparison
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ClimateDetails {
    /// Original recipe
    pub original: ClimateTotals,
    /// Vegan recipe including supplements
    pub vegan: ClimateTotals,
    /// Supplements alone
    pub supplements: ClimateTotals,
}

/// Original versus vegan climate comparison
///
/// Percentages are always finite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClimateComparison {
    /// CO2 reduction in percent
    pub co2_reduction: i64,
    /// Water saving in percent
    pub water_saving: i64,
    /// Land saving in percent
    pub land_saving: i64,
    /// Underlying totals
    pub details: ClimateDetails,
}

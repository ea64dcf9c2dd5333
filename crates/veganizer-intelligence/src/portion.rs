// ABOUTME: Per-ingredient portion weights with a 100 g default
// ABOUTME: Converts portions into nutrition scale factors and kilograms for impact math
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use veganizer_core::constants::portions::{
    DEFAULT_PORTION_GRAMS, GRAMS_PER_KG, NUTRITION_REFERENCE_GRAMS,
};

/// Portion weight applied to each ingredient of a list
///
/// Ingredients without an override use the default weight. Overrides are
/// positional and must be finite and positive to take effect.
#[derive(Debug, Clone, PartialEq)]
pub struct PortionPlan {
    default_grams: f64,
    overrides: Vec<Option<f64>>,
}

impl Default for PortionPlan {
    fn default() -> Self {
        Self::uniform(DEFAULT_PORTION_GRAMS)
    }
}

impl PortionPlan {
    /// Same weight for every ingredient
    #[must_use]
    pub fn uniform(grams: f64) -> Self {
        Self {
            default_grams: if grams.is_finite() && grams > 0.0 {
                grams
            } else {
                DEFAULT_PORTION_GRAMS
            },
            overrides: Vec::new(),
        }
    }

    /// Override the weight of the ingredient at `index`
    #[must_use]
    pub fn with_override(mut self, index: usize, grams: f64) -> Self {
        if self.overrides.len() <= index {
            self.overrides.resize(index + 1, None);
        }
        self.overrides[index] = Some(grams).filter(|g| g.is_finite() && *g > 0.0);
        self
    }

    /// Plan built from positional weights
    #[must_use]
    pub fn from_grams(grams: &[f64]) -> Self {
        grams
            .iter()
            .enumerate()
            .fold(Self::default(), |plan, (index, g)| plan.with_override(index, *g))
    }

    /// Weight in grams of the ingredient at `index`
    #[must_use]
    pub fn grams(&self, index: usize) -> f64 {
        self.overrides
            .get(index)
            .copied()
            .flatten()
            .unwrap_or(self.default_grams)
    }

    /// Weight in kilograms of the ingredient at `index`
    #[must_use]
    pub fn kilograms(&self, index: usize) -> f64 {
        self.grams(index) / GRAMS_PER_KG
    }

    /// Factor applied to per-100 g values for the ingredient at `index`
    #[must_use]
    pub fn reference_factor(&self, index: usize) -> f64 {
        self.grams(index) / NUTRITION_REFERENCE_GRAMS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_plan_is_one_hundred_grams() {
        let plan = PortionPlan::default();
        assert!((plan.grams(0) - 100.0).abs() < f64::EPSILON);
        assert!((plan.kilograms(5) - 0.1).abs() < f64::EPSILON);
        assert!((plan.reference_factor(3) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_overrides_are_positional() {
        let plan = PortionPlan::default().with_override(2, 250.0);
        assert!((plan.grams(1) - 100.0).abs() < f64::EPSILON);
        assert!((plan.grams(2) - 250.0).abs() < f64::EPSILON);
        assert!((plan.reference_factor(2) - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_invalid_weights_are_ignored() {
        let plan = PortionPlan::from_grams(&[-5.0, f64::NAN, 50.0]);
        assert!((plan.grams(0) - 100.0).abs() < f64::EPSILON);
        assert!((plan.grams(1) - 100.0).abs() < f64::EPSILON);
        assert!((plan.grams(2) - 50.0).abs() < f64::EPSILON);
        assert!((PortionPlan::uniform(0.0).grams(0) - 100.0).abs() < f64::EPSILON);
    }
}

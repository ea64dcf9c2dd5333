// ABOUTME: Rounding helpers shared by the nutrition, climate and animal calculators
// ABOUTME: Decimal rounding and finite percentage reductions with fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Round `value` to `decimals` decimal places
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

/// Percentage reduction from `original` to `reduced`, rounded to an integer
///
/// Returns `fallback` when `original` is zero or the result is not finite.
#[must_use]
pub fn reduction_percentage(original: f64, reduced: f64, fallback: i64) -> i64 {
    if original.abs() < f64::EPSILON {
        return fallback;
    }
    let percentage = ((original - reduced) / original * 100.0).round();
    if percentage.is_finite() {
        percentage as i64
    } else {
        fallback
    }
}

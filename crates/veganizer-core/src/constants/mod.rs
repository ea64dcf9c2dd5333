// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Portion sizes, fallback values, thresholds and recipe defaults used by the pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Scalar constants grouped by pipeline stage. Keyword tables used for fuzzy
//! matching live next to the algorithms in `veganizer-intelligence`.

/// Portion assumptions applied per ingredient
pub mod portions {
    /// Default weight of one ingredient portion in grams
    pub const DEFAULT_PORTION_GRAMS: f64 = 100.0;
    /// Grams per kilogram
    pub const GRAMS_PER_KG: f64 = 1000.0;
    /// Reference weight nutrition records are expressed against
    pub const NUTRITION_REFERENCE_GRAMS: f64 = 100.0;
    /// Default animal product quantity in kilograms when none is supplied
    pub const DEFAULT_ANIMAL_QUANTITY_KG: f64 = 0.1;
}

/// Values used when no nutrition record matches an ingredient
pub mod nutrition_defaults {
    /// Energy (kcal)
    pub const CALORIES: f64 = 150.0;
    /// Protein (g)
    pub const PROTEINS_G: f64 = 8.0;
    /// Carbohydrates (g)
    pub const CARBS_G: f64 = 15.0;
    /// Fat (g)
    pub const FATS_G: f64 = 5.0;
    /// Fiber (g)
    pub const FIBER_G: f64 = 3.0;
    /// Calcium (mg)
    pub const CALCIUM_MG: f64 = 50.0;
    /// Iron (mg)
    pub const IRON_MG: f64 = 2.0;
    /// Zinc (mg)
    pub const ZINC_MG: f64 = 1.0;
}

/// Supplement recommendation policy
pub mod supplements {
    /// Always recommended
    pub const B12: &str = "Vitamine B12 Vegan";
    /// Always recommended
    pub const OMEGA_3: &str = "Omega 3 Vegan";
    /// Recommended below `IRON_THRESHOLD_MG`
    pub const IRON: &str = "Fer bisglycinate";
    /// Recommended below `ZINC_THRESHOLD_MG`
    pub const ZINC: &str = "Zinc bisglycinate";
    /// Recommended below `CALCIUM_THRESHOLD_MG`
    pub const CALCIUM: &str = "Calcium + Vitamine D3";
    /// Recommended below `PROTEIN_THRESHOLD_G`
    pub const PROTEIN: &str = "Spiruline";

    /// Iron deficiency threshold (mg)
    pub const IRON_THRESHOLD_MG: f64 = 6.0;
    /// Zinc deficiency threshold (mg)
    pub const ZINC_THRESHOLD_MG: f64 = 6.0;
    /// Calcium deficiency threshold (mg)
    pub const CALCIUM_THRESHOLD_MG: f64 = 350.0;
    /// Protein deficiency threshold (g)
    pub const PROTEIN_THRESHOLD_G: f64 = 15.0;
}

/// Climate impact fallbacks
pub mod climate {
    /// Category used when no keyword matches
    pub const DEFAULT_CATEGORY: &str = "vegetables";
    /// kg CO2e per 100 g portion when the category has no metric
    pub const FALLBACK_CO2_KG: f64 = 2.0;
    /// Liters of water per 100 g portion when the category has no metric
    pub const FALLBACK_WATER_L: f64 = 50.0;
    /// m² of land per 100 g portion when the category has no metric
    pub const FALLBACK_LAND_M2: f64 = 1.5;
    /// CO2 reduction (%) reported when the computed value is unusable
    pub const FALLBACK_CO2_REDUCTION: i64 = 65;
    /// Water saving (%) reported when the computed value is unusable
    pub const FALLBACK_WATER_SAVING: i64 = 78;
    /// Land saving (%) reported when the computed value is unusable
    pub const FALLBACK_LAND_SAVING: i64 = 83;
}

/// Animal impact math
pub mod animals {
    /// Days per year used for life-years conversion
    pub const DAYS_PER_YEAR: f64 = 365.0;
}

/// Shopping list cost estimation
pub mod shopping {
    /// Average cost per ingredient (EUR)
    pub const COST_PER_INGREDIENT: f64 = 3.5;
    /// Savings versus an omnivorous basket
    pub const SAVINGS_RATE: f64 = 0.25;
}

/// Recipe metadata defaults and the generic conversion template
pub mod recipes {
    /// Maximum number of ingredient slots per recipe
    pub const MAX_INGREDIENT_SLOTS: usize = 6;
    /// Cooking time shown for the original recipe when unknown
    pub const ORIGINAL_COOKING_TIME: &str = "2h";
    /// Cooking time shown for the vegan recipe when unknown
    pub const VEGAN_COOKING_TIME: &str = "1h45";
    /// Servings shown for a stored recipe when unknown
    pub const DEFAULT_SERVINGS: u32 = 6;
    /// Servings used by the generic template
    pub const GENERIC_SERVINGS: u32 = 4;
    /// Difficulty of the original recipe when unknown
    pub const ORIGINAL_DIFFICULTY: &str = "Moyen";
    /// Difficulty of every vegan recipe
    pub const VEGAN_DIFFICULTY: &str = "Facile";
    /// Appended to the original name when no vegan name is stored
    pub const VEGAN_NAME_SUFFIX: &str = " (Version Végane)";
    /// Template used for recipes missing from the store
    pub const GENERIC_TEMPLATE: [&str; 5] = [
        "viande principale",
        "légumes variés",
        "base sauce",
        "aromates",
        "féculents",
    ];
    /// Human-readable substitution note prefix
    pub const SUBSTITUTION_NOTE_PREFIX: &str = "remplace";
}

/// Recipe search
pub mod search {
    /// Maximum number of search results
    pub const RESULT_LIMIT: usize = 10;
    /// Minimum query length (characters) for suggestions
    pub const MIN_QUERY_CHARS: usize = 2;
    /// Shown when a recipe has no cooking time
    pub const UNKNOWN_COOKING_TIME: &str = "Temps variable";
    /// Shown when a recipe has no servings
    pub const UNKNOWN_SERVINGS: u32 = 4;
    /// Shown when a recipe has no difficulty
    pub const UNKNOWN_DIFFICULTY: &str = "Difficulté moyenne";
}

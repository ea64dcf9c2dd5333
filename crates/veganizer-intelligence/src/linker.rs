// ABOUTME: Links recipe and substitution ingredients to nutrition records
// ABOUTME: Exact, partial and mapped name matching with per-source link statistics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Ingredient Linker
//!
//! Produces a read-only report of how many stored ingredient names resolve to
//! a nutrition record. Plant substitutes and prepared products are skipped
//! up front since the nutrition table does not carry them.

use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use veganizer_core::models::{NutritionRecord, Recipe, SubstitutionRule};

use crate::normalize::{normalize, NormalizeMode};

/// Ingredients whose nutrition entry is filed under another name
const NAME_MAPPINGS: &[(&str, &str)] = &[
    ("veau", "veau"),
    ("bœuf", "boeuf"),
    ("poulet", "poulet"),
    ("lait", "lait"),
    ("crème fraîche", "crème"),
    ("beurre", "beurre"),
    ("fromage", "fromage"),
    ("yaourt", "yaourt"),
    ("jambon", "jambon"),
    ("saumon", "saumon"),
    ("thon", "thon"),
    ("œufs", "oeuf"),
    ("œuf", "oeuf"),
    ("vin rouge", "vin"),
    ("vin blanc", "vin"),
    ("huile d'olive", "huile"),
    ("huile", "huile"),
    ("carottes", "carotte"),
    ("champignons", "champignon"),
    ("tomates", "tomate"),
    ("pommes de terre", "pomme de terre"),
    ("oignons", "oignon"),
];

/// Plant substitutes and prepared products absent from the nutrition table
const SKIP_KEYWORDS: &[&str] = &[
    "vegetal",
    "vegane",
    "vegetale",
    "vegetaux",
    "tofu",
    "seitan",
    "tempeh",
    "aquafaba",
    "protéines de soja",
    "protéines de blé",
    "protéines végétales",
    "gremolata",
    "aromes naturels",
    "algue",
    "king oyster",
    "shiitake",
    "lait d'amande",
    "huile coco",
    "crème d'amande",
    "eau de vichy",
];

static MAPPING_INDEX: LazyLock<HashMap<String, String>> = LazyLock::new(|| {
    NAME_MAPPINGS
        .iter()
        .map(|(from, to)| {
            (
                normalize(from, NormalizeMode::Key),
                normalize(to, NormalizeMode::Key),
            )
        })
        .collect()
});

static SKIP_INDEX: LazyLock<Vec<String>> = LazyLock::new(|| {
    SKIP_KEYWORDS
        .iter()
        .map(|keyword| normalize(keyword, NormalizeMode::Key))
        .collect()
});

/// How an ingredient was linked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkMatch {
    /// Same normalized name
    Exact,
    /// Record name contains the ingredient
    Partial,
    /// Record name contains the mapped name
    Mapped,
}

/// Linked versus total ingredient names
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkStats {
    /// Ingredient names considered
    pub total: usize,
    /// Names that resolved to a record
    pub linked: usize,
}

impl LinkStats {
    /// Linked share in percent, 0 when nothing was considered
    #[must_use]
    pub fn rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.linked as f64 * 100.0 / self.total as f64
    }
}

/// Link statistics for recipes and substitution rules
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkingReport {
    /// Original and vegan recipe slot ingredients
    pub recipe_ingredients: LinkStats,
    /// Substitution originals and substitutes
    pub substitution_ingredients: LinkStats,
    /// Distinct names left unlinked, sorted
    pub unmatched: Vec<String>,
}

#[derive(Debug, Clone)]
struct LinkTarget {
    key: String,
    record: NutritionRecord,
}

/// Matches ingredient names against nutrition record names
#[derive(Debug, Clone, Default)]
pub struct IngredientLinker {
    targets: Vec<LinkTarget>,
}

impl IngredientLinker {
    /// Index records by normalized name, keeping store order
    #[must_use]
    pub fn new(records: Vec<NutritionRecord>) -> Self {
        let targets = records
            .into_iter()
            .map(|record| LinkTarget {
                key: normalize(&record.name, NormalizeMode::Key),
                record,
            })
            .filter(|target| !target.key.is_empty())
            .collect();
        Self { targets }
    }

    /// Record linked to `ingredient` and how it matched
    #[must_use]
    pub fn link(&self, ingredient: &str) -> Option<(LinkMatch, &NutritionRecord)> {
        let key = normalize(ingredient, NormalizeMode::Key);
        if key.is_empty() || is_skipped(&key) {
            return None;
        }

        if let Some(target) = self.targets.iter().find(|t| t.key == key) {
            return Some((LinkMatch::Exact, &target.record));
        }
        if let Some(target) = self.targets.iter().find(|t| t.key.contains(&key)) {
            return Some((LinkMatch::Partial, &target.record));
        }
        let mapped = MAPPING_INDEX.get(&key)?;
        self.targets
            .iter()
            .find(|t| t.key.contains(mapped.as_str()))
            .map(|target| (LinkMatch::Mapped, &target.record))
    }

    /// Link every filled slot of every recipe, originals and vegan replacements
    #[must_use]
    pub fn link_recipes(&self, recipes: &[Recipe]) -> (LinkStats, Vec<String>) {
        let names: Vec<&str> = recipes
            .iter()
            .flat_map(|recipe| recipe.filled_slots())
            .flat_map(|slot| [slot.original_name(), slot.vegan_name()])
            .flatten()
            .collect();
        self.link_names(&names)
    }

    /// Link both sides of every substitution rule
    #[must_use]
    pub fn link_substitutions(&self, rules: &[SubstitutionRule]) -> (LinkStats, Vec<String>) {
        let names: Vec<&str> = rules
            .iter()
            .flat_map(|rule| [rule.original_ingredient.as_str(), rule.vegan_substitute.as_str()])
            .filter(|name| !name.trim().is_empty())
            .collect();
        self.link_names(&names)
    }

    /// Full report over recipes and substitution rules
    #[must_use]
    pub fn report(&self, recipes: &[Recipe], rules: &[SubstitutionRule]) -> LinkingReport {
        let (recipe_ingredients, recipe_misses) = self.link_recipes(recipes);
        let (substitution_ingredients, rule_misses) = self.link_substitutions(rules);
        let unmatched: BTreeSet<String> = recipe_misses.into_iter().chain(rule_misses).collect();

        LinkingReport {
            recipe_ingredients,
            substitution_ingredients,
            unmatched: unmatched.into_iter().collect(),
        }
    }

    fn link_names(&self, names: &[&str]) -> (LinkStats, Vec<String>) {
        let misses: Vec<String> = names
            .par_iter()
            .filter(|name| self.link(name).is_none())
            .map(|name| (*name).to_owned())
            .collect();
        let stats = LinkStats {
            total: names.len(),
            linked: names.len() - misses.len(),
        };
        (stats, misses)
    }
}

fn is_skipped(key: &str) -> bool {
    SKIP_INDEX.iter().any(|keyword| key.contains(keyword.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use veganizer_core::constants::recipes::MAX_INGREDIENT_SLOTS;
    use veganizer_core::models::RecipeSlot;

    fn linker() -> IngredientLinker {
        IngredientLinker::new(vec![
            NutritionRecord::named("Carotte, crue"),
            NutritionRecord::named("Oeuf, cru"),
            NutritionRecord::named("Boeuf, bourguignon, cuit"),
            NutritionRecord::named("Crème fraîche épaisse"),
            NutritionRecord::named("Tomate"),
        ])
    }

    #[test]
    fn test_match_tiers() {
        let linker = linker();
        assert_eq!(linker.link("Tomates").map(|(m, _)| m), Some(LinkMatch::Exact));
        assert_eq!(linker.link("carotte").map(|(m, _)| m), Some(LinkMatch::Partial));
        assert_eq!(linker.link("œufs").map(|(m, _)| m), Some(LinkMatch::Mapped));
        assert!(linker.link("courgette").is_none());
    }

    #[test]
    fn test_plant_substitutes_are_skipped() {
        let linker = IngredientLinker::new(vec![NutritionRecord::named("Tofu nature")]);
        assert!(linker.link("tofu").is_none());
        assert!(linker.link("crème végétale").is_none());
    }

    #[test]
    fn test_report_counts_both_sides() {
        let linker = linker();
        let recipes = vec![Recipe::new(
            "Boeuf bourguignon",
            vec![
                RecipeSlot::with_vegan("boeuf", "seitan"),
                RecipeSlot::with_vegan("carottes", "carottes").already_vegan(),
            ],
        )];
        let rules = vec![SubstitutionRule::new("crème fraîche", "crème de soja")];

        let report = linker.report(&recipes, &rules);
        assert_eq!(report.recipe_ingredients, LinkStats { total: 4, linked: 3 });
        assert_eq!(report.substitution_ingredients, LinkStats { total: 2, linked: 1 });
        assert_eq!(report.unmatched, vec!["crème de soja".to_owned(), "seitan".to_owned()]);
        assert!((report.recipe_ingredients.rate() - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_slots_past_the_limit_are_not_counted() {
        let linker = linker();
        let mut slots: Vec<RecipeSlot> = (0..MAX_INGREDIENT_SLOTS)
            .map(|_| RecipeSlot::original("tomate"))
            .collect();
        slots.push(RecipeSlot::original("courgette"));
        slots.push(RecipeSlot::default());
        let recipes = vec![Recipe::new("Ratatouille", slots)];

        let (stats, misses) = linker.link_recipes(&recipes);

        assert_eq!(
            stats,
            LinkStats { total: MAX_INGREDIENT_SLOTS, linked: MAX_INGREDIENT_SLOTS }
        );
        assert!(misses.is_empty());
    }
}

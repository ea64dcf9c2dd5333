// ABOUTME: Substitution resolver mapping original ingredients to vegan replacements
// ABOUTME: Exact normalized match first, then ranked two-way containment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Substitution Resolver
//!
//! Matching order for an ingredient whose slot carries no stored vegan
//! replacement:
//!
//! 1. Exact match on the normalized (`Strict`) original name.
//! 2. Rules whose original is contained in the ingredient. The longest original wins.
//! 3. Rules whose original contains the ingredient. The shortest original wins.
//!
//! Remaining ties break on the normalized original in lexicographic order, so
//! the result never depends on the order rules were loaded in. An ingredient
//! nothing matches passes through unchanged and is assumed vegan.

use std::collections::HashMap;

use rayon::prelude::*;
use tracing::{debug, warn};
use veganizer_core::constants::recipes::SUBSTITUTION_NOTE_PREFIX;
use veganizer_core::models::{RecipeSlot, SubstitutionRule, VeganIngredient};

use crate::normalize::{best_containment, normalize, NormalizeMode};

#[derive(Debug, Clone)]
struct IndexedRule {
    key: String,
    rule: SubstitutionRule,
}

/// Resolves original ingredients against a snapshot of substitution rules
#[derive(Debug, Clone, Default)]
pub struct SubstitutionResolver {
    rules: Vec<IndexedRule>,
    exact: HashMap<String, usize>,
}

impl SubstitutionResolver {
    /// Index `rules` by normalized original name
    ///
    /// Rules whose normalized original collides with an earlier rule, or is
    /// empty, are dropped with a warning.
    #[must_use]
    pub fn new(rules: Vec<SubstitutionRule>) -> Self {
        let mut indexed = Vec::with_capacity(rules.len());
        let mut exact = HashMap::with_capacity(rules.len());

        for rule in rules {
            let key = substitution_key(&rule.original_ingredient);
            if key.is_empty() {
                warn!(
                    original = %rule.original_ingredient,
                    "Skipping substitution rule with empty key"
                );
                continue;
            }
            if exact.contains_key(&key) {
                warn!(key = %key, "Skipping duplicate substitution rule");
                continue;
            }
            exact.insert(key.clone(), indexed.len());
            indexed.push(IndexedRule { key, rule });
        }

        Self {
            rules: indexed,
            exact,
        }
    }

    /// Number of indexed rules
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// No rule indexed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Best rule for `ingredient`, if any
    #[must_use]
    pub fn find(&self, ingredient: &str) -> Option<&SubstitutionRule> {
        let query = substitution_key(ingredient);
        if query.is_empty() {
            return None;
        }

        if let Some(&index) = self.exact.get(&query) {
            return Some(&self.rules[index].rule);
        }

        best_containment(
            &query,
            self.rules
                .iter()
                .map(|indexed| (indexed.key.as_str(), &indexed.rule)),
        )
    }

    /// Vegan ingredient for one original ingredient
    ///
    /// A stored replacement takes precedence over rule matching; it counts as
    /// a substitution unless the original is flagged as already vegan.
    #[must_use]
    pub fn resolve(
        &self,
        original: &str,
        stored_vegan: Option<&str>,
        already_vegan: bool,
    ) -> VeganIngredient {
        if let Some(vegan) = stored_vegan {
            return VeganIngredient {
                name: vegan.to_owned(),
                substitution: (!already_vegan).then(|| substitution_note(original)),
                is_substituted: !already_vegan,
            };
        }

        match self.find(original) {
            Some(rule) => {
                debug!(original, substitute = %rule.vegan_substitute, "Substitution rule matched");
                VeganIngredient {
                    name: rule.vegan_substitute.clone(),
                    substitution: Some(substitution_note(original)),
                    is_substituted: true,
                }
            }
            None => VeganIngredient {
                name: original.to_owned(),
                substitution: None,
                is_substituted: false,
            },
        }
    }

    /// Resolve every filled recipe slot, preserving slot order
    #[must_use]
    pub fn resolve_slots(&self, slots: &[RecipeSlot]) -> Vec<VeganIngredient> {
        slots
            .par_iter()
            .filter_map(|slot| {
                slot.original_name()
                    .map(|original| self.resolve(original, slot.vegan_name(), slot.already_vegan))
            })
            .collect()
    }

    /// Resolve bare ingredient names, preserving order
    #[must_use]
    pub fn resolve_ingredients(&self, ingredients: &[String]) -> Vec<VeganIngredient> {
        ingredients
            .par_iter()
            .map(|ingredient| self.resolve(ingredient, None, false))
            .collect()
    }
}

/// Normalized key used for substitution matching
#[must_use]
pub fn substitution_key(ingredient: &str) -> String {
    normalize(ingredient, NormalizeMode::Strict)
}

fn substitution_note(original: &str) -> String {
    format!("{SUBSTITUTION_NOTE_PREFIX} {original}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> Vec<SubstitutionRule> {
        vec![
            SubstitutionRule::new("viande", "haché végétal"),
            SubstitutionRule::new("bœuf", "haché végétal ou seitan"),
            SubstitutionRule::new("crème fraîche", "crème de soja"),
            SubstitutionRule::new("lait", "lait végétal"),
        ]
    }

    #[test]
    fn test_exact_match_wins() {
        let resolver = SubstitutionResolver::new(rules());
        let rule = resolver.find("BŒUF").unwrap();
        assert_eq!(rule.vegan_substitute, "haché végétal ou seitan");
    }

    #[test]
    fn test_containment_tie_break_ignores_rule_order() {
        let mut reversed = rules();
        reversed.reverse();

        for resolver in [
            SubstitutionResolver::new(rules()),
            SubstitutionResolver::new(reversed),
        ] {
            let rule = resolver.find("viande de bœuf hachée").unwrap();
            assert_eq!(rule.original_ingredient, "viande");
            let rule = resolver.find("crème").unwrap();
            assert_eq!(rule.original_ingredient, "crème fraîche");
        }
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        let resolver = SubstitutionResolver::new(rules());
        assert!(resolver.find("").is_none());
        assert!(resolver.find("  123 !! ").is_none());
    }

    #[test]
    fn test_duplicate_normalized_originals_are_dropped() {
        let resolver = SubstitutionResolver::new(vec![
            SubstitutionRule::new("Bœuf", "seitan"),
            SubstitutionRule::new("boeuf", "tofu"),
        ]);
        assert_eq!(resolver.len(), 1);
        assert_eq!(resolver.find("boeuf").unwrap().vegan_substitute, "seitan");
    }

    #[test]
    fn test_stored_vegan_ingredient_takes_precedence() {
        let resolver = SubstitutionResolver::new(rules());
        let swapped = resolver.resolve("lait entier", Some("lait d'avoine"), false);
        assert_eq!(swapped.name, "lait d'avoine");
        assert_eq!(swapped.substitution.as_deref(), Some("remplace lait entier"));
        assert!(swapped.is_substituted);

        let kept = resolver.resolve("carotte", Some("carotte"), true);
        assert!(!kept.is_substituted);
        assert!(kept.substitution.is_none());
    }

    #[test]
    fn test_unmatched_ingredient_passes_through() {
        let resolver = SubstitutionResolver::new(rules());
        let result = resolver.resolve("courgette", None, false);
        assert_eq!(result.name, "courgette");
        assert!(!result.is_substituted);
    }
}

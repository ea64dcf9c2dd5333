// ABOUTME: Canonicalizes French ingredient and recipe names for fuzzy matching
// ABOUTME: Lowercasing, ligature expansion, diacritic stripping and plural folding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Text Normalizer
//!
//! The same ingredient string always yields the same key across the
//! substitution, nutrition, climate and animal matchers. `normalize` is
//! idempotent in both modes.

use regex::Regex;
use std::cmp::Reverse;
use std::sync::LazyLock;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// How much punctuation survives normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalizeMode {
    /// Keep digits and punctuation (nutrition and recipe lookup)
    #[default]
    Key,
    /// Also strip digits and punctuation (substitution lookup)
    Strict,
}

/// Whole-string plural forms folded to singular
const PLURAL_FOLDS: &[(&str, &str)] = &[
    ("courgettes", "courgette"),
    ("echalotes", "echalote"),
    ("navets", "navet"),
    ("champignons", "champignon"),
    ("carottes", "carotte"),
    ("tomates", "tomate"),
    ("oignons", "oignon"),
    ("pommes de terre", "pomme de terre"),
    ("pommes", "pomme"),
    ("poires", "poire"),
    ("abricots", "abricot"),
    ("amandes", "amande"),
    ("artichauts", "artichaut"),
    ("endives", "endive"),
    ("cardons", "cardon"),
    ("topinambours", "topinambour"),
    ("pistaches", "pistache"),
    ("pois chiches", "pois chiche"),
    ("biscuits", "biscuit"),
];

/// Descriptors that never help a nutrition lookup
static DESCRIPTORS: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:entier|frais|biologiques?|bio)\b|amazon|voir sur").ok()
});

/// Canonical key for an ingredient or recipe name
///
/// Lowercases, expands `œ`/`æ`, strips diacritics, optionally strips digits
/// and punctuation, collapses whitespace, then folds known plurals.
#[must_use]
pub fn normalize(input: &str, mode: NormalizeMode) -> String {
    let lowered = input
        .to_lowercase()
        .replace('œ', "oe")
        .replace('æ', "ae")
        .replace('ß', "ss");

    let stripped: String = lowered
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| match mode {
            NormalizeMode::Key => true,
            NormalizeMode::Strict => {
                !c.is_ascii_digit() && (c.is_alphanumeric() || *c == '_' || c.is_whitespace())
            }
        })
        .collect();

    let collapsed = stripped.split_whitespace().collect::<Vec<_>>().join(" ");
    fold_plural(collapsed)
}

fn fold_plural(key: String) -> String {
    PLURAL_FOLDS
        .iter()
        .find(|(plural, _)| *plural == key)
        .map_or(key, |(_, singular)| (*singular).to_owned())
}

/// Remove cosmetic noise before a nutrition lookup
///
/// Drops emoji and non-Latin symbols, affiliate phrases ("Amazon",
/// "Voir sur") and descriptors ("entier", "frais", "bio", "biologique").
#[must_use]
pub fn clean_for_nutrition_lookup(ingredient: &str) -> String {
    let latin: String = ingredient
        .chars()
        .filter(|c| c.is_ascii() || ('\u{00C0}'..='\u{024F}').contains(c))
        .collect();

    let without_descriptors = DESCRIPTORS
        .as_ref()
        .map_or_else(|| latin.clone(), |re| re.replace_all(&latin, "").into_owned());

    without_descriptors
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// `keyword` occurs in `text` as a whole word, optionally pluralized
///
/// Both arguments are expected to be normalized. A keyword embedded in a
/// longer word ("ail" in "volaille", "lait" in "laitue") does not count,
/// while a trailing `s` or `x` ("poulets") does.
#[must_use]
pub fn contains_word(text: &str, keyword: &str) -> bool {
    if keyword.is_empty() {
        return false;
    }
    text.match_indices(keyword).any(|(index, _)| {
        let starts = text[..index]
            .chars()
            .next_back()
            .is_none_or(|previous| !previous.is_alphanumeric());
        let mut rest = text[index + keyword.len()..].chars();
        let ends = match rest.next() {
            None => true,
            Some('s' | 'x') => rest.next().is_none_or(|next| !next.is_alphanumeric()),
            Some(next) => !next.is_alphanumeric(),
        };
        starts && ends
    })
}

/// Candidate ordering for two-way containment matches, smaller is better
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum ContainmentRank<'a> {
    /// Key inside the query, longer is better
    Contained { len: Reverse<usize>, key: &'a str },
    /// Query inside the key, shorter is better
    Containing { len: usize, key: &'a str },
}

fn containment_rank<'a>(query: &str, key: &'a str) -> Option<ContainmentRank<'a>> {
    if key.is_empty() {
        None
    } else if query.contains(key) {
        Some(ContainmentRank::Contained {
            len: Reverse(key.len()),
            key,
        })
    } else if key.contains(query) {
        Some(ContainmentRank::Containing {
            len: key.len(),
            key,
        })
    } else {
        None
    }
}

/// Best two-way substring match for `query` among normalized `candidates`
///
/// Keys contained in the query beat keys that contain it. Among the former
/// the longest key wins, among the latter the shortest. Remaining ties break
/// on the key, so the result does not depend on candidate order.
pub fn best_containment<'a, T>(
    query: &str,
    candidates: impl IntoIterator<Item = (&'a str, T)>,
) -> Option<T> {
    if query.is_empty() {
        return None;
    }
    candidates
        .into_iter()
        .filter_map(|(key, value)| containment_rank(query, key).map(|rank| (rank, value)))
        .min_by(|(a, _), (b, _)| a.cmp(b))
        .map(|(_, value)| value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_accents_and_case() {
        assert_eq!(normalize("BŒUF Bourguignon", NormalizeMode::Key), "boeuf bourguignon");
        assert_eq!(normalize("Crème Fraîche", NormalizeMode::Key), "creme fraiche");
        assert_eq!(normalize("  Pâtes   fraîches ", NormalizeMode::Key), "pates fraiches");
    }

    #[test]
    fn test_normalize_strict_drops_digits_and_punctuation() {
        assert_eq!(normalize("200g de lardons!", NormalizeMode::Strict), "g de lardons");
        assert_eq!(normalize("sirop d'érable", NormalizeMode::Strict), "sirop derable");
        assert_eq!(normalize("sirop d'érable", NormalizeMode::Key), "sirop d'erable");
    }

    #[test]
    fn test_plural_folding_is_whole_string() {
        assert_eq!(normalize("Carottes", NormalizeMode::Key), "carotte");
        assert_eq!(normalize("Pommes de terre", NormalizeMode::Key), "pomme de terre");
        assert_eq!(normalize("pois chiches", NormalizeMode::Key), "pois chiche");
        assert_eq!(normalize("carottes râpées", NormalizeMode::Key), "carottes rapees");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in [
            "BŒUF Bourguignon",
            "Échalotes",
            "pommes de terre",
            "lait d'amande 🥛",
            "200 g de Crème",
            "",
        ] {
            for mode in [NormalizeMode::Key, NormalizeMode::Strict] {
                let once = normalize(raw, mode);
                assert_eq!(normalize(&once, mode), once, "not idempotent for {raw:?}");
            }
        }
    }

    #[test]
    fn test_clean_for_nutrition_lookup() {
        assert_eq!(clean_for_nutrition_lookup("Seitan entier 🌱"), "Seitan");
        assert_eq!(clean_for_nutrition_lookup("Tofu bio Voir sur Amazon"), "Tofu");
        assert_eq!(clean_for_nutrition_lookup("lait frais"), "lait");
        assert_eq!(clean_for_nutrition_lookup("crème fraîche"), "crème fraîche");
    }

    #[test]
    fn test_whole_word_containment() {
        assert!(contains_word("blanc de poulet", "poulet"));
        assert!(contains_word("poulets fermiers", "poulet"));
        assert!(contains_word("jambon, dés", "jambon"));
        assert!(!contains_word("volaille", "ail"));
        assert!(!contains_word("boeuf", "oeuf"));
        assert!(!contains_word("laitue", "lait"));
        assert!(!contains_word("anything", ""));
    }

    #[test]
    fn test_best_containment_ranking() {
        let keys = ["lait", "lait de coco", "laitue romaine"];
        let pick = |query: &str| best_containment(query, keys.iter().map(|k| (*k, *k)));

        assert_eq!(pick("lait de coco bio"), Some("lait de coco"));
        assert_eq!(pick("lai"), Some("lait"));
        assert_eq!(pick("romaine"), Some("laitue romaine"));
        assert_eq!(pick(""), None);
        assert_eq!(pick("tofu"), None);
    }
}

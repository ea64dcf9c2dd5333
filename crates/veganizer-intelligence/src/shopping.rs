// ABOUTME: Shopping list builder grouping vegan ingredients by store aisle
// ABOUTME: Keyword categorization in priority order with a flat cost and savings estimate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::LazyLock;

use veganizer_core::constants::shopping::{COST_PER_INGREDIENT, SAVINGS_RATE};
use veganizer_core::models::ShoppingList;

use crate::normalize::{normalize, NormalizeMode};
use crate::precision::round_to;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Aisle {
    FruitsVegetables,
    Proteins,
    Alternatives,
    DryGoods,
}

/// Aisles checked in order, the first keyword hit wins
const AISLE_KEYWORDS: &[(Aisle, &[&str])] = &[
    (
        Aisle::FruitsVegetables,
        &[
            "carotte",
            "oignon",
            "champignon",
            "légume",
            "tomate",
            "courgette",
            "pomme de terre",
        ],
    ),
    (
        Aisle::Proteins,
        &[
            "soja",
            "tofu",
            "seitan",
            "tempeh",
            "protéine",
            "légumineuse",
            "lentille",
            "pois chiche",
        ],
    ),
    (
        Aisle::Alternatives,
        &[
            "lait végétal",
            "crème",
            "beurre végétal",
            "fromage végétal",
            "yaourt",
        ],
    ),
];

static NORMALIZED_AISLES: LazyLock<Vec<(Aisle, Vec<String>)>> = LazyLock::new(|| {
    AISLE_KEYWORDS
        .iter()
        .map(|(aisle, keywords)| {
            (
                *aisle,
                keywords
                    .iter()
                    .map(|keyword| normalize(keyword, NormalizeMode::Key))
                    .collect(),
            )
        })
        .collect()
});

fn aisle_for(ingredient: &str) -> Aisle {
    let key = normalize(ingredient, NormalizeMode::Key);
    NORMALIZED_AISLES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| key.contains(keyword.as_str())))
        .map_or(Aisle::DryGoods, |(aisle, _)| *aisle)
}

/// Group vegan ingredients by aisle and estimate the basket cost
///
/// Ingredients keep their original spelling and input order within each
/// aisle. Cost is a flat amount per ingredient, savings a fixed share of it.
#[must_use]
pub fn build_shopping_list(ingredients: &[String]) -> ShoppingList {
    let mut list = ShoppingList::default();
    for ingredient in ingredients {
        let bucket = match aisle_for(ingredient) {
            Aisle::FruitsVegetables => &mut list.fruits_vegetables,
            Aisle::Proteins => &mut list.proteins,
            Aisle::Alternatives => &mut list.alternatives,
            Aisle::DryGoods => &mut list.dry_goods,
        };
        bucket.push(ingredient.clone());
    }

    let estimated_cost = ingredients.len() as f64 * COST_PER_INGREDIENT;
    list.estimated_cost = round_to(estimated_cost, 2);
    list.savings = round_to(estimated_cost * SAVINGS_RATE, 2);
    list
}

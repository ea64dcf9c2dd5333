// ABOUTME: Menu service aggregating animals spared across recipes, servings and weeks
// ABOUTME: Resolves menu entries by exact normalized recipe name and skips unknown ones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracing::{info, instrument, warn};
use veganizer_core::models::{AnimalSavings, MenuItem, Recipe};
use veganizer_intelligence::AnimalCalculator;

use super::load_or_empty;
use crate::database::Repositories;

/// Scores whole menus
#[derive(Clone)]
pub struct MenuService {
    repos: Repositories,
}

impl MenuService {
    /// Create the service
    #[must_use]
    pub const fn new(repos: Repositories) -> Self {
        Self { repos }
    }

    /// Animals spared by a menu repeated over `weeks`
    ///
    /// Entries without servings count one serving. Entries naming no stored
    /// recipe are skipped.
    #[instrument(skip(self, menu), fields(items = menu.len()))]
    pub async fn calculate_menu_animals_saved(
        &self,
        menu: &[MenuItem],
        weeks: u32,
    ) -> AnimalSavings {
        let mut resolved: Vec<(Recipe, u32)> = Vec::with_capacity(menu.len());
        for item in menu {
            if let Some(recipe) = self.lookup(&item.recipe_name).await {
                resolved.push((recipe, item.servings.unwrap_or(1)));
            }
        }

        let records = load_or_empty("animal_impacts", self.repos.animal_impacts.list_all()).await;
        let savings = AnimalCalculator::new(records).calculate_menu(
            resolved.iter().map(|(recipe, servings)| (recipe, *servings)),
            weeks,
        );

        info!(
            recipes = resolved.len(),
            animals = savings.total_animals,
            "Menu scored"
        );
        savings
    }

    async fn lookup(&self, name: &str) -> Option<Recipe> {
        match self.repos.recipes.get_by_name(name).await {
            Ok(Some(recipe)) => Some(recipe),
            Ok(None) => {
                warn!(recipe = name, "Menu recipe not found, skipping");
                None
            }
            Err(e) => {
                warn!(recipe = name, error = %e, "Menu recipe lookup failed, skipping");
                None
            }
        }
    }
}

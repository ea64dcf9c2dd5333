// ABOUTME: Linking service reporting nutrition coverage of recipe and substitution ingredients
// ABOUTME: Read-only: it builds a report and never writes links back to the store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracing::{info, instrument};
use veganizer_intelligence::{IngredientLinker, LinkingReport};

use crate::database::Repositories;
use crate::errors::AppResult;

/// Reports nutrition coverage of the reference ingredients
#[derive(Clone)]
pub struct LinkingService {
    repos: Repositories,
}

impl LinkingService {
    /// Create the service
    #[must_use]
    pub const fn new(repos: Repositories) -> Self {
        Self { repos }
    }

    /// Link every recipe slot and substitution rule to a nutrition record
    ///
    /// # Errors
    ///
    /// Returns an error if a reference table cannot be listed; a report over
    /// partial tables would misstate coverage
    #[instrument(skip(self))]
    pub async fn link_all(&self) -> AppResult<LinkingReport> {
        let (records, recipes, rules) = tokio::join!(
            self.repos.nutrition.list_all(),
            self.repos.recipes.list_all(),
            self.repos.substitutions.list_all(),
        );
        let (records, recipes, rules) = (records?, recipes?, rules?);

        let report = IngredientLinker::new(records).report(&recipes, &rules);
        info!(
            recipe_linked = report.recipe_ingredients.linked,
            recipe_total = report.recipe_ingredients.total,
            rule_linked = report.substitution_ingredients.linked,
            rule_total = report.substitution_ingredients.total,
            unmatched = report.unmatched.len(),
            "Ingredient linking complete"
        );
        Ok(report)
    }
}

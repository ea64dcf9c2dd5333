// ABOUTME: Impact scoring commands for veganizer-cli
// ABOUTME: Animals spared for ingredient lists and menus, climate comparison of two lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use tracing::warn;
use veganizer::database::Repositories;
use veganizer::errors::AppError;
use veganizer::services::{ConversionService, MenuService};
use veganizer_core::models::{MenuItem, Supplement};

use crate::helpers::display::print_json;

/// Print animals spared by removing `ingredients`
pub async fn animals(
    service: &ConversionService,
    ingredients: &[String],
    quantities: &[f64],
) -> Result<()> {
    if !quantities.is_empty() && quantities.len() != ingredients.len() {
        warn!(
            ingredients = ingredients.len(),
            quantities = quantities.len(),
            "Quantity count differs from ingredient count, missing entries use 0.1 kg"
        );
    }
    let quantities = (!quantities.is_empty()).then_some(quantities);
    let savings = service
        .calculate_animals_saved(ingredients, &[], quantities)
        .await;
    print_json(&savings)
}

/// Print the climate comparison of two ingredient lists
pub async fn climate(
    service: &ConversionService,
    repos: &Repositories,
    original: &[String],
    vegan: &[String],
    supplement_names: &[String],
) -> Result<()> {
    let mut supplements: Vec<Supplement> = Vec::with_capacity(supplement_names.len());
    for name in supplement_names {
        let supplement = repos
            .supplements
            .get_by_name(name)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Supplement '{name}'")))?;
        supplements.push(supplement);
    }

    let comparison = service
        .compare_climate_impact(original, vegan, &supplements)
        .await;
    print_json(&comparison)
}

/// Print animals spared by a menu of `recipe[:servings]` entries over `weeks`
pub async fn menu(service: &MenuService, entries: &[String], weeks: u32) -> Result<()> {
    let items: Vec<MenuItem> = entries.iter().map(|entry| parse_menu_entry(entry)).collect();
    let savings = service.calculate_menu_animals_saved(&items, weeks).await;
    print_json(&savings)
}

/// Parse `name` or `name:servings`; a suffix that is not a number stays in the name
fn parse_menu_entry(entry: &str) -> MenuItem {
    if let Some((name, servings)) = entry.rsplit_once(':') {
        if let Ok(servings) = servings.trim().parse::<u32>() {
            return MenuItem::new(name.trim()).with_servings(servings);
        }
    }
    MenuItem::new(entry.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_menu_entry() {
        let item = parse_menu_entry("Bœuf bourguignon:4");
        assert_eq!(item.recipe_name, "Bœuf bourguignon");
        assert_eq!(item.servings, Some(4));

        let item = parse_menu_entry("Quiche lorraine");
        assert_eq!(item.servings, None);

        let item = parse_menu_entry("Soupe: version hiver");
        assert_eq!(item.recipe_name, "Soupe: version hiver");
        assert_eq!(item.servings, None);
    }
}

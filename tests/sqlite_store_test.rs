// ABOUTME: Integration tests for the SQLite reference store opened through configuration
// ABOUTME: Covers file databases, seeding once, and parity with the in-memory store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::conversion_service;
use tempfile::TempDir;
use veganizer::config::{DatabaseUrl, ServerConfig};
use veganizer::database::{self, ReferenceData};
use veganizer::services::{ConversionService, MenuService};
use veganizer_core::models::MenuItem;

fn sqlite_config(dir: &TempDir) -> ServerConfig {
    ServerConfig {
        database: DatabaseUrl::SQLite {
            path: dir.path().join("veganizer.db"),
        },
        ..ServerConfig::default()
    }
}

#[tokio::test]
async fn test_file_database_is_seeded_with_builtin_data() {
    common::init_test_logging();
    let dir = TempDir::new().unwrap();

    let repos = database::open(&sqlite_config(&dir)).await.unwrap();

    let recipes = repos.recipes.list_all().await.unwrap();
    assert_eq!(recipes.len(), ReferenceData::builtin().recipes.len());
    assert!(dir.path().join("veganizer.db").exists());
}

#[tokio::test]
async fn test_reopening_does_not_reseed() {
    common::init_test_logging();
    let dir = TempDir::new().unwrap();
    let config = sqlite_config(&dir);

    let first = database::open(&config).await.unwrap();
    let rules_before = first.substitutions.list_all().await.unwrap();
    drop(first);

    let second = database::open(&config).await.unwrap();
    let rules_after = second.substitutions.list_all().await.unwrap();

    assert_eq!(rules_before.len(), rules_after.len());
    assert_eq!(rules_before, rules_after);
}

#[tokio::test]
async fn test_sqlite_conversion_matches_in_memory() {
    common::init_test_logging();
    let dir = TempDir::new().unwrap();
    let sqlite = ConversionService::new(database::open(&sqlite_config(&dir)).await.unwrap());
    let memory = conversion_service();

    for name in ["Bœuf bourguignon", "Quiche lorraine", "Tarte aux pommes"] {
        let from_sqlite = sqlite.convert_recipe(name).await.unwrap();
        let from_memory = memory.convert_recipe(name).await.unwrap();

        assert_eq!(from_sqlite.original_recipe, from_memory.original_recipe, "{name}");
        assert_eq!(from_sqlite.vegan_recipe, from_memory.vegan_recipe, "{name}");
        assert_eq!(from_sqlite.substitution_count, from_memory.substitution_count);
        assert_eq!(
            from_sqlite.nutrition_comparison,
            from_memory.nutrition_comparison,
            "{name}"
        );
        assert_eq!(from_sqlite.climate_comparison, from_memory.climate_comparison);
        assert_eq!(from_sqlite.animal_savings, from_memory.animal_savings);
    }
}

#[tokio::test]
async fn test_in_memory_sqlite_backend() {
    common::init_test_logging();
    let config = ServerConfig {
        database: DatabaseUrl::SQLiteMemory,
        ..ServerConfig::default()
    };
    let repos = database::open(&config).await.unwrap();

    let savings = MenuService::new(repos)
        .calculate_menu_animals_saved(&[MenuItem::new("Poulet basquaise")], 1)
        .await;

    assert!((savings.animal_breakdown.chickens - 0.05).abs() < 1e-9);
}

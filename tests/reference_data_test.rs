// ABOUTME: Integration tests for loading reference data from JSON files
// ABOUTME: Covers file loading through open(), partial documents and load failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use veganizer::config::{DatabaseUrl, ServerConfig};
use veganizer::database::{self, ReferenceData};
use veganizer::errors::ErrorCode;
use veganizer::services::ConversionService;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[tokio::test]
async fn test_builtin_dataset_survives_a_json_file() {
    let dir = TempDir::new().unwrap();
    let builtin = ReferenceData::builtin();
    let json = serde_json::to_string_pretty(&builtin).unwrap();
    let path = write_file(&dir, "reference.json", &json);

    let loaded = ReferenceData::load(&path).await.unwrap();

    assert_eq!(loaded, builtin);
}

#[tokio::test]
async fn test_open_uses_configured_data_file() {
    common::init_test_logging();
    let dir = TempDir::new().unwrap();
    let json = r#"{
        "recipes": [
            {
                "name": "Blanquette de veau",
                "slots": [
                    { "original": "veau", "vegan": "champignons de Paris" },
                    { "original": "crème fraîche" }
                ],
                "vegan_name": "Blanquette de champignons"
            }
        ],
        "substitutions": [
            { "original_ingredient": "crème fraîche", "vegan_substitute": "crème de soja" }
        ]
    }"#;
    let path = write_file(&dir, "blanquette.json", json);
    let config = ServerConfig {
        data_path: Some(path),
        ..ServerConfig::default()
    };

    let service = ConversionService::new(database::open(&config).await.unwrap());
    let result = service.convert_recipe("blanquette de veau").await.unwrap();

    assert!(!result.generated_from_template);
    assert_eq!(result.vegan_recipe.name, "Blanquette de champignons");
    assert_eq!(
        result.vegan_recipe.ingredient_names(),
        vec!["champignons de Paris", "crème de soja"]
    );
    assert_eq!(result.substitution_count, 2);
}

#[tokio::test]
async fn test_invalid_json_is_a_serialization_error() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "broken.json", "{ \"recipes\": [ ");

    let error = ReferenceData::load(&path).await.unwrap_err();

    assert_eq!(error.code, ErrorCode::SerializationError);
}

#[tokio::test]
async fn test_missing_file_is_a_config_error() {
    let error = ReferenceData::load(Path::new("/nonexistent/veganizer/reference.json"))
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::ConfigError);
}

#[tokio::test]
async fn test_open_fails_on_conflicting_rules() {
    let dir = TempDir::new().unwrap();
    let json = r#"{
        "substitutions": [
            { "original_ingredient": "beurre", "vegan_substitute": "margarine" },
            { "original_ingredient": "BEURRE", "vegan_substitute": "huile de coco" }
        ]
    }"#;
    let path = write_file(&dir, "conflict.json", json);
    let config = ServerConfig {
        data_path: Some(path),
        ..ServerConfig::default()
    };

    let error = database::open(&config).await.err().unwrap();

    assert_eq!(error.code, ErrorCode::ResourceAlreadyExists);
}

#[tokio::test]
async fn test_conflicting_rules_leave_sqlite_file_unseeded() {
    let dir = TempDir::new().unwrap();
    let json = r#"{
        "recipes": [
            { "name": "Croque-monsieur", "slots": [{ "original": "beurre" }] }
        ],
        "substitutions": [
            { "original_ingredient": "beurre", "vegan_substitute": "margarine" },
            { "original_ingredient": "BEURRE", "vegan_substitute": "huile de coco" }
        ]
    }"#;
    let path = write_file(&dir, "conflict.json", json);
    let config = ServerConfig {
        data_path: Some(path),
        database: DatabaseUrl::SQLite {
            path: dir.path().join("veganizer.db"),
        },
        ..ServerConfig::default()
    };

    let first = database::open(&config).await.err().unwrap();
    let second = database::open(&config).await.err().unwrap();

    assert_eq!(first.code, ErrorCode::ResourceAlreadyExists);
    assert_eq!(second.code, ErrorCode::ResourceAlreadyExists);
}

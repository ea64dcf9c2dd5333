// ABOUTME: Integration tests for environment-driven configuration
// ABOUTME: Runs serially since every test mutates process environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

use std::env;
use std::path::PathBuf;

use serial_test::serial;
use veganizer::config::{DatabaseUrl, Environment, ServerConfig};
use veganizer::constants::env_vars;

const ALL_VARS: [&str; 5] = [
    env_vars::DATA_PATH,
    env_vars::DATABASE_URL,
    env_vars::ENVIRONMENT,
    env_vars::PORTION_GRAMS,
    env_vars::RUST_LOG,
];

fn clear_env() {
    for var in ALL_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();

    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config.database, DatabaseUrl::Memory);
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.portion_grams, 100.0);
    assert!(config.data_path.is_none());
}

#[test]
#[serial]
fn test_sqlite_database_url() {
    clear_env();
    env::set_var(env_vars::DATABASE_URL, "sqlite:./data/veganizer.db");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert_eq!(
        config.database,
        DatabaseUrl::SQLite {
            path: PathBuf::from("./data/veganizer.db")
        }
    );
    assert!(config.database.is_sqlite());
}

#[test]
#[serial]
fn test_server_database_url_is_rejected() {
    clear_env();
    env::set_var(env_vars::DATABASE_URL, "postgresql://localhost/veganizer");

    let result = ServerConfig::from_env();
    clear_env();

    assert!(result.is_err());
}

#[test]
#[serial]
fn test_portion_grams_parsing() {
    clear_env();

    env::set_var(env_vars::PORTION_GRAMS, " 150 ");
    assert_eq!(ServerConfig::from_env().unwrap().portion_grams, 150.0);

    env::set_var(env_vars::PORTION_GRAMS, "");
    assert_eq!(ServerConfig::from_env().unwrap().portion_grams, 100.0);

    env::set_var(env_vars::PORTION_GRAMS, "beaucoup");
    assert!(ServerConfig::from_env().is_err());

    env::set_var(env_vars::PORTION_GRAMS, "-20");
    assert!(ServerConfig::from_env().is_err());

    clear_env();
}

#[test]
#[serial]
fn test_data_path_and_overrides() {
    clear_env();
    env::set_var(env_vars::DATA_PATH, "/tmp/reference.json");
    env::set_var(env_vars::ENVIRONMENT, "production");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.data_path, Some(PathBuf::from("/tmp/reference.json")));
    assert!(config.environment.is_production());

    let overridden = config.with_overrides(Some(DatabaseUrl::SQLiteMemory), None);
    assert_eq!(overridden.database, DatabaseUrl::SQLiteMemory);
    assert_eq!(overridden.data_path, Some(PathBuf::from("/tmp/reference.json")));
}

#[test]
#[serial]
fn test_blank_data_path_is_ignored() {
    clear_env();
    env::set_var(env_vars::DATA_PATH, "  ");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert!(config.data_path.is_none());
}

// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses storage backend, reference data path, portion size and log level from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use std::env;
use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use veganizer_core::constants::portions::DEFAULT_PORTION_GRAMS;

use crate::constants::{env_vars, storage};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe reference data backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DatabaseUrl {
    /// In-process store seeded from JSON or built-in data
    #[default]
    Memory,
    /// `SQLite` database file
    SQLite {
        /// Database file path
        path: PathBuf,
    },
    /// In-memory `SQLite` database
    SQLiteMemory,
}

impl DatabaseUrl {
    /// Parse a `DATABASE_URL` value
    ///
    /// # Errors
    ///
    /// Returns an error for an empty `SQLite` path or a server database URL,
    /// which this application does not support
    pub fn parse_url(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case(storage::MEMORY_BACKEND) {
            return Ok(Self::Memory);
        }
        if s.starts_with("postgres://") || s.starts_with("postgresql://") {
            bail!("Unsupported database URL scheme: only sqlite: and memory are available");
        }
        match s.strip_prefix("sqlite:") {
            Some(":memory:") => Ok(Self::SQLiteMemory),
            Some(path) => {
                let path = path.trim_start_matches("//");
                if path.is_empty() {
                    bail!("SQLite database URL is missing a file path");
                }
                Ok(Self::SQLite {
                    path: PathBuf::from(path),
                })
            }
            // Fallback: treat as SQLite file path
            None => Ok(Self::SQLite {
                path: PathBuf::from(s),
            }),
        }
    }

    /// Convert to connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::Memory => storage::MEMORY_BACKEND.to_owned(),
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::SQLiteMemory => "sqlite::memory:".to_owned(),
        }
    }

    /// Any `SQLite` backend
    #[must_use]
    pub const fn is_sqlite(&self) -> bool {
        matches!(self, Self::SQLite { .. } | Self::SQLiteMemory)
    }
}

impl Display for DatabaseUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// Reference data backend
    pub database: DatabaseUrl,
    /// JSON reference data used to seed the store, built-in data otherwise
    pub data_path: Option<PathBuf>,
    /// Default ingredient portion in grams
    pub portion_grams: f64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            log_level: LogLevel::default(),
            database: DatabaseUrl::default(),
            data_path: None,
            portion_grams: DEFAULT_PORTION_GRAMS,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but malformed
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let database = DatabaseUrl::parse_url(&env_var_or(
            env_vars::DATABASE_URL,
            storage::DEFAULT_DATABASE_URL,
        ))
        .with_context(|| format!("Invalid {} value", env_vars::DATABASE_URL))?;

        let portion_grams = env_var_or(env_vars::PORTION_GRAMS, "")
            .trim()
            .to_owned();
        let portion_grams = if portion_grams.is_empty() {
            DEFAULT_PORTION_GRAMS
        } else {
            portion_grams
                .parse::<f64>()
                .with_context(|| format!("Invalid {} value", env_vars::PORTION_GRAMS))?
        };

        let config = Self {
            environment: Environment::from_str_or_default(&env_var_or(
                env_vars::ENVIRONMENT,
                "development",
            )),
            log_level: LogLevel::from_str_or_default(&env_var_or(env_vars::RUST_LOG, "info")),
            database,
            data_path: env::var(env_vars::DATA_PATH)
                .ok()
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
            portion_grams,
        };

        config.validate()?;
        info!("{}", config.summary());
        Ok(config)
    }

    /// Validate cross-field constraints
    ///
    /// # Errors
    ///
    /// Returns an error if the portion size is not a positive finite number
    pub fn validate(&self) -> Result<()> {
        if !self.portion_grams.is_finite() || self.portion_grams <= 0.0 {
            bail!(
                "{} must be a positive number of grams, got {}",
                env_vars::PORTION_GRAMS,
                self.portion_grams
            );
        }

        if let Some(path) = &self.data_path {
            if !path.exists() {
                warn!(path = %path.display(), "Reference data file does not exist");
            }
        }

        Ok(())
    }

    /// Override the backend and data path, as the CLI flags do
    #[must_use]
    pub fn with_overrides(
        mut self,
        database: Option<DatabaseUrl>,
        data_path: Option<PathBuf>,
    ) -> Self {
        if let Some(database) = database {
            self.database = database;
        }
        if data_path.is_some() {
            self.data_path = data_path;
        }
        self
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Veganizer Configuration:\n\
             - Environment: {}\n\
             - Log Level: {}\n\
             - Database: {}\n\
             - Reference Data: {}\n\
             - Portion: {} g",
            self.environment,
            self.log_level,
            self.database,
            self.data_path
                .as_ref()
                .map_or_else(|| "built-in".to_owned(), |path| path.display().to_string()),
            self.portion_grams
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

// ABOUTME: Logging configuration and structured logging setup for the Veganizer CLI and services
// ABOUTME: Configures log levels, formatters and output destination through tracing-subscriber
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging configuration
//!
//! Logs go to stderr so command output on stdout stays machine readable.

use std::env;
use std::io;

use anyhow::Result;
use serde_json::json;
use tracing::{info, Level};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::constants::{env_vars, service_names};

/// Logging configuration
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)] // Independent output toggles
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Include span open/close events
    pub include_spans: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Environment (development, testing, production)
    pub environment: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` lines for log shipping
    Json,
    /// Multi-line human readable output
    Pretty,
    /// Single-line output
    Compact,
}

impl LogFormat {
    /// Parse from string, compact unless json or pretty is asked for
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            _ => Self::Compact,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            format: LogFormat::Compact,
            include_location: false,
            include_thread: false,
            include_spans: false,
            service_name: service_names::VEGANIZER.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let environment =
            env::var(env_vars::ENVIRONMENT).unwrap_or_else(|_| defaults.environment.clone());
        let is_production = environment == "production";

        Self {
            level: env::var(env_vars::RUST_LOG).unwrap_or(defaults.level),
            format: env::var(env_vars::LOG_FORMAT)
                .map_or(defaults.format, |format| LogFormat::from_str_or_default(&format)),
            include_location: is_production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: env::var("LOG_INCLUDE_THREAD").is_ok(),
            include_spans: env::var("LOG_INCLUDE_SPANS").is_ok(),
            service_name: defaults.service_name,
            service_version: defaults.service_version,
            environment,
        }
    }

    /// Verbosity override from repeated `-v` flags
    #[must_use]
    pub fn with_verbosity(mut self, verbose: u8) -> Self {
        let level = match verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        };
        if let Some(level) = level {
            self.level = level.to_owned();
        }
        self
    }

    /// Filter built from the configured level plus noise reduction for sqlx
    fn env_filter(&self) -> EnvFilter {
        let mut filter = EnvFilter::try_new(&self.level)
            .unwrap_or_else(|_| EnvFilter::new(Level::WARN.as_str()))
            .add_directive(
                "sqlx=warn"
                    .parse()
                    .unwrap_or_else(|_| Level::WARN.into()),
            );

        // A bare level also scopes our own crates explicitly
        if !self.level.contains('=') && !self.level.contains(',') {
            for target in [service_names::LOG_TARGET, "veganizer_intelligence"] {
                filter = filter.add_directive(
                    format!("{target}={}", self.level)
                        .parse()
                        .unwrap_or_else(|_| Level::WARN.into()),
                );
            }
        }
        filter
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());
        let span_events = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .with_span_events(span_events)
                    .json();

                registry.with(json_layer).try_init()?;
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .pretty()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_writer(io::stderr)
                    .with_span_events(span_events);

                registry.with(pretty_layer).try_init()?;
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(false)
                    .with_writer(io::stderr)
                    .with_span_events(span_events);

                registry.with(compact_layer).try_init()?;
            }
        }

        self.log_startup_info();
        Ok(())
    }

    fn log_startup_info(&self) {
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "Veganizer starting up"
        );

        let config_summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
                "environment": self.environment
            },
            "logging": {
                "level": self.level,
                "format": format!("{:?}", self.format),
                "features": {
                    "location": self.include_location,
                    "thread": self.include_thread,
                    "spans": self.include_spans
                }
            }
        });

        info!("Logging configured: {}", config_summary);
    }
}

// ABOUTME: Application-level constants for the Veganizer binary and services
// ABOUTME: Service identity, environment variable names and storage defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Application constants
//!
//! Pipeline constants (portions, thresholds, fallbacks) live in
//! `veganizer_core::constants`; this module only holds values the
//! application shell needs.

/// Service identity used in structured logs
pub mod service_names {
    /// Service name
    pub const VEGANIZER: &str = "veganizer";
    /// Log target of this crate, used to scope the default log filter
    pub const LOG_TARGET: &str = "veganizer";
}

/// Environment variable names
pub mod env_vars {
    /// JSON reference data file loaded into the in-memory store
    pub const DATA_PATH: &str = "VEGANIZER_DATA_PATH";
    /// `sqlite:<path>`, `sqlite::memory:` or `memory`
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// development, production or testing
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Log filter directive
    pub const RUST_LOG: &str = "RUST_LOG";
    /// json, pretty or compact
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Default ingredient portion in grams
    pub const PORTION_GRAMS: &str = "VEGANIZER_PORTION_GRAMS";
}

/// Storage defaults
pub mod storage {
    /// Backend used when `DATABASE_URL` is unset
    pub const DEFAULT_DATABASE_URL: &str = "memory";
    /// Keyword selecting the in-memory store
    pub const MEMORY_BACKEND: &str = "memory";
}

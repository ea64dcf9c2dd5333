// ABOUTME: Main library entry point for the Veganizer recipe conversion platform
// ABOUTME: Wires configuration, logging, reference data stores and conversion services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Veganizer
//!
//! Converts French recipes into vegan equivalents and scores the conversion:
//! nutrition before and after (with supplement recommendations), climate
//! footprint reduction, animals spared, and a shopping list.
//!
//! ## Architecture
//!
//! - **veganizer-core**: error types, constants and domain models
//! - **veganizer-intelligence**: pure matching and scoring algorithms
//! - **database**: read-only reference data behind async repository traits,
//!   backed by an in-memory store or `SQLite`
//! - **services**: the conversion orchestrator plus menu and linking services
//!
//! ## Example
//!
//! ```rust,no_run
//! use veganizer::database::{InMemoryStore, ReferenceData, Repositories};
//! use veganizer::services::ConversionService;
//!
//! # async fn example() -> veganizer::errors::AppResult<()> {
//! let store = InMemoryStore::new(ReferenceData::builtin())?;
//! let service = ConversionService::new(Repositories::from_store(store));
//! let result = service.convert_recipe("Bœuf bourguignon").await?;
//! println!("{} substitutions", result.substitution_count);
//! # Ok(())
//! # }
//! ```

/// Environment-driven configuration
pub mod config;

/// Application constants and environment variable names
pub mod constants;

/// Reference data repositories and their in-memory and `SQLite` stores
pub mod database;

/// Error types shared with `veganizer-core`
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Conversion, menu and linking services
pub mod services;

// ABOUTME: Core types and constants for the Veganizer recipe conversion platform
// ABOUTME: Foundation crate with error handling, reference data models, and pipeline constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Veganizer Core
//!
//! Foundation crate providing shared types and constants for the recipe
//! veganization pipeline. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `DatabaseError`
//! - **constants**: Fallback values, thresholds, and keyword tables used by the pipeline
//! - **models**: Reference data records (recipes, substitution rules, nutrition, climate,
//!   animal impact) and the serializable conversion result

/// Unified error handling system with standard error codes
pub mod errors;

/// Pipeline constants organized by domain
pub mod constants;

/// Reference data models and conversion result types
pub mod models;

// ABOUTME: Re-exports the unified error types defined in veganizer-core
// ABOUTME: Keeps crate::errors paths stable for services, stores and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! Library code returns [`AppResult`]; store implementations return
//! [`DatabaseError`], which converts into [`AppError`] with `?`. Binaries
//! wrap everything in `anyhow` at the edge.

pub use veganizer_core::errors::{AppError, AppResult, DatabaseError, ErrorCode};

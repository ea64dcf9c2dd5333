// ABOUTME: Configuration module root for environment-driven settings
// ABOUTME: Exposes ServerConfig and its strongly typed parts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration is read from environment variables only; there is no
//! configuration file.

/// Environment variable parsing into `ServerConfig`
pub mod environment;

pub use environment::{DatabaseUrl, Environment, LogLevel, ServerConfig};

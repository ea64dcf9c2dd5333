// ABOUTME: Output formatting helpers for veganizer-cli
// ABOUTME: Every command prints one pretty JSON document on stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{Context, Result};
use serde::Serialize;

/// Print `value` as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered =
        serde_json::to_string_pretty(value).context("Failed to serialize command output")?;
    println!("{rendered}");
    Ok(())
}

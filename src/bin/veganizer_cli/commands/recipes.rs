// ABOUTME: Recipe commands for veganizer-cli
// ABOUTME: Converts a recipe by name and searches stored recipe names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use veganizer::services::ConversionService;
use veganizer_core::models::ConversionResult;

use crate::helpers::display::print_json;

/// Conversion output stamped with the time it was produced
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConvertOutput<'a> {
    #[serde(flatten)]
    result: &'a ConversionResult,
    converted_at: DateTime<Utc>,
}

/// Convert a recipe and print the full comparison
pub async fn convert(service: &ConversionService, name: &str) -> Result<()> {
    let result = service.convert_recipe(name).await?;
    if result.generated_from_template {
        info!(recipe = name, "No stored recipe matched, output uses the generic template");
    }
    print_json(&ConvertOutput {
        result: &result,
        converted_at: Utc::now(),
    })
}

/// Print search suggestions for `query`
pub async fn search(service: &ConversionService, query: &str) -> Result<()> {
    let suggestions = service.search_recipes(query).await;
    info!(query, results = suggestions.len(), "Recipe search");
    print_json(&suggestions)
}

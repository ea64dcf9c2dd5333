// ABOUTME: Reference data commands for veganizer-cli
// ABOUTME: Reports nutrition link coverage of recipe and substitution ingredients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use veganizer::services::LinkingService;

use crate::helpers::display::print_json;

/// Print the ingredient linking report
pub async fn link_stats(service: &LinkingService) -> Result<()> {
    let report = service.link_all().await?;
    print_json(&report)
}

// ABOUTME: Service layer composing reference repositories with the intelligence calculators
// ABOUTME: Conversion orchestration, menu aggregation and ingredient linking reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Service layer
//!
//! Services load the reference tables a request needs from [`Repositories`]
//! and hand snapshots to the synchronous calculators. A failed table load is
//! logged and treated as an empty table, so every lookup degrades to its
//! documented fallback instead of failing the request.
//!
//! [`Repositories`]: crate::database::Repositories

use std::future::Future;

use tracing::warn;

use crate::errors::DatabaseError;

/// Recipe conversion orchestrator
pub mod conversion;

/// Ingredient to nutrition record linking statistics
pub mod linking;

/// Menu-level animal impact
pub mod menu;

pub use conversion::ConversionService;
pub use linking::LinkingService;
pub use menu::MenuService;

/// Await a table listing, logging a store failure and yielding no rows
pub(crate) async fn load_or_empty<T, F>(table: &'static str, listing: F) -> Vec<T>
where
    F: Future<Output = Result<Vec<T>, DatabaseError>>,
{
    match listing.await {
        Ok(rows) => rows,
        Err(e) => {
            warn!(table, error = %e, "Reference table unavailable, continuing without it");
            Vec::new()
        }
    }
}

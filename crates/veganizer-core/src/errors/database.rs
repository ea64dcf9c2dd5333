// ABOUTME: Structured error types for reference store operations
// ABOUTME: Provides domain-specific errors with context and optional sqlx conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Errors raised by reference store implementations
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DatabaseError {
    /// Could not open or reach the store
    #[error("Database connection failed: {context}")]
    ConnectionError {
        /// Connection details
        context: String,
    },

    /// A query or statement failed
    #[error("Database query failed: {context}")]
    QueryError {
        /// Query details
        context: String,
    },

    /// Schema creation failed
    #[error("Database migration failed: {context}")]
    MigrationError {
        /// Migration details
        context: String,
    },

    /// Record lookup by key returned nothing
    #[error("{entity_type} not found: {entity_id}")]
    NotFound {
        /// Kind of record
        entity_type: &'static str,
        /// Key that was looked up
        entity_id: String,
    },

    /// A record with the same normalized key already exists
    #[error("Duplicate {entity_type} for normalized key '{key}'")]
    DuplicateKey {
        /// Kind of record
        entity_type: &'static str,
        /// Normalized key that collided
        key: String,
    },

    /// Stored value could not be decoded
    #[error("Serialization failed: {context}")]
    SerializationError {
        /// Decoding details
        context: String,
    },
}

#[cfg(feature = "database-errors")]
impl From<sqlx::Error> for DatabaseError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::Configuration(e) => Self::ConnectionError {
                context: e.to_string(),
            },
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => Self::ConnectionError {
                context: error.to_string(),
            },
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
                Self::SerializationError {
                    context: error.to_string(),
                }
            }
            other => Self::QueryError {
                context: other.to_string(),
            },
        }
    }
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for strata-core operations.

use chrono::NaiveDate;
use thiserror::Error;

/// All possible errors that can occur in strata-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("issue not found: {0}")]
    IssueNotFound(String),

    #[error("failed to look up '{field}' events for {key} (window {start} to {end}): {source}")]
    EventLookup {
        key: String,
        field: String,
        start: NaiveDate,
        end: NaiveDate,
        #[source]
        source: Box<Error>,
    },

    #[error("invalid date range: {start} is after {end}\n  hint: the window start must not be later than its end")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("invalid date: '{value}'\n  hint: use YYYY-MM-DD or YYYY-MM")]
    InvalidDate { value: String },

    #[error("invalid timestamp '{value}' for {context}")]
    InvalidTimestamp { value: String, context: String },

    #[error("invalid issue URL '{value}' for {key}")]
    InvalidUrl { value: String, key: String },

    #[error("invalid taxonomy: {0}")]
    InvalidTaxonomy(String),

    #[error("line {line}: {reason}")]
    ParseLine { line: usize, reason: String },

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("corrupted data: {0}")]
    CorruptedData(String),
}

/// A specialized Result type for strata-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

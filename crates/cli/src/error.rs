// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the strata CLI.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not initialized: run 'strata init' first")]
    NotInitialized,

    #[error("already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("issue not found: {0}")]
    IssueNotFound(String),

    #[error("output path cannot be empty")]
    OutputPathEmpty,

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(strata_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for strata CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<strata_core::Error> for Error {
    fn from(e: strata_core::Error) -> Self {
        match e {
            strata_core::Error::IssueNotFound(key) => Error::IssueNotFound(key),
            strata_core::Error::Io(e) => Error::Io(e),
            strata_core::Error::Json(e) => Error::Json(e),
            other => Error::Core(other),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

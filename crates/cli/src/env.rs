// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All runtime environment variables used by the CLI are named in [`vars`]
//! with typed accessor functions below. `STRATA_CACHE` is bound directly on
//! the `--cache` flag.

/// Environment variable names.
pub mod vars {
    /// Database path override, same as `--cache`.
    pub const STRATA_CACHE: &str = "STRATA_CACHE";
    /// `tracing` filter directives for stderr logging.
    pub const STRATA_LOG: &str = "STRATA_LOG";
    /// Print phase timings to stderr when set.
    pub const STRATA_TIMINGS: &str = "STRATA_TIMINGS";
}

/// Filter used when `STRATA_LOG` is unset or empty.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Returns `true` if `STRATA_TIMINGS` is set (any value).
pub fn timings_enabled() -> bool {
    std::env::var(vars::STRATA_TIMINGS).is_ok()
}

/// Returns the `STRATA_LOG` directives, or [`DEFAULT_LOG_FILTER`].
pub fn log_filter() -> String {
    std::env::var(vars::STRATA_LOG)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;

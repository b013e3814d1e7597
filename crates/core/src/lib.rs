// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! strata-core: status history reconstruction for tracked issues
//!
//! This crate provides the cached data model, the SQLite cache, and the
//! engine that replays each issue's changelog day by day and folds the
//! results into per-category daily counts.
//!
//! The pipeline, leaves first:
//!
//! - [`EventStore`] - ordered changelog access per issue and field
//! - [`Taxonomy`] - maps free-form status strings onto fixed categories
//! - [`replay()`] - lazy `(day, category)` sequence for one issue
//! - [`aggregate()`] - per-day histogram over the whole population
//! - [`emit()`] - day axis plus one count array per category

pub mod aggregate;
pub mod day;
pub mod db;
pub mod error;
pub mod import;
pub mod issue;
pub mod replay;
pub mod series;
pub mod store;
pub mod taxonomy;

pub use aggregate::{aggregate, DailyBucket, Histogram};
pub use day::{day_key, parse_day, DateRange};
pub use db::Database;
pub use error::{Error, Result};
pub use import::{read_records, ImportedIssue};
pub use issue::{Issue, TransitionEvent, STATUS_FIELD};
pub use replay::{replay, Replay};
pub use series::{compute_daily_status_series, emit, CategorySeries, StatusSeries};
pub use store::EventStore;
pub use taxonomy::{Category, Taxonomy};

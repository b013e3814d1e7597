// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Cached issue records and their changelog.

use chrono::{DateTime, NaiveDate, Utc};

use crate::day::day_of;

/// Name of the changelog field tracked by default.
pub const STATUS_FIELD: &str = "status";

/// An issue as cached from the upstream tracker.
///
/// Read-only input to the replay engine. Only `key`, `created_at` and
/// `status` matter for reconstruction; the rest is carried for listings.
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    /// Stable tracker key (e.g. `IPL-5530`).
    pub key: String,
    /// Browse URL on the upstream tracker.
    pub url: String,
    /// Issue type name (Bug, Task, ...).
    pub issue_type: String,
    /// Status as last reported by the tracker. Free-form.
    pub status: String,
    /// Resolution name, empty when unresolved.
    pub resolution: String,
    pub summary: String,
    pub labels: Vec<String>,
    /// Display name of the reporter.
    pub creator: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Issue {
    /// Creates an issue with only the fields the engine needs; the rest are empty.
    pub fn new(key: String, status: String, created_at: DateTime<Utc>) -> Self {
        Issue {
            key,
            url: String::new(),
            issue_type: String::new(),
            status,
            resolution: String::new(),
            summary: String::new(),
            labels: Vec::new(),
            creator: String::new(),
            created_at,
            updated_at: created_at,
        }
    }

    /// First day a status must be assigned for.
    pub fn created_day(&self) -> NaiveDate {
        day_of(self.created_at)
    }
}

/// One recorded change of a single field on an issue.
///
/// Immutable once stored. For a fixed `(issue_key, field)` events are
/// ordered by `timestamp`, ties broken by `id` (insertion order).
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionEvent {
    /// Store-assigned identifier, 0 until inserted.
    pub id: i64,
    pub issue_key: String,
    /// Display name of whoever made the change, empty if unknown.
    pub author: String,
    pub timestamp: DateTime<Utc>,
    pub field: String,
    pub from_value: String,
    pub to_value: String,
}

impl TransitionEvent {
    /// Creates an unsaved event.
    pub fn new(
        issue_key: String,
        timestamp: DateTime<Utc>,
        field: String,
        from_value: String,
        to_value: String,
    ) -> Self {
        TransitionEvent {
            id: 0,
            issue_key,
            author: String::new(),
            timestamp,
            field,
            from_value,
            to_value,
        }
    }

    /// Sets the author (builder pattern).
    pub fn with_author(mut self, author: String) -> Self {
        self.author = author;
        self
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;

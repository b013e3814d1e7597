// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

//! Test infrastructure for command testing without filesystem setup.
//!
//! This module provides a `TestContext` that wraps an in-memory database
//! and a default config, enabling commands to be tested without requiring
//! an actual `.strata/` directory.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::commands::testing::TestContext;
//!
//! #[test]
//! fn test_some_command() {
//!     let mut ctx = TestContext::new();
//!     ctx.create_issue("IPL-1", "2024-03-01")
//!         .transition("IPL-1", "2024-03-04T10:00:00Z", "Accepted");
//!
//!     // Test command logic using ctx.db and ctx.config
//! }
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use strata_core::{Database, Issue, TransitionEvent, STATUS_FIELD};

use crate::cli::WindowArgs;
use crate::config::Config;

/// Test context providing in-memory database and default config for testing.
pub struct TestContext {
    pub db: Database,
    pub config: Config,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// Create a new test context with in-memory database and default config.
    pub fn new() -> Self {
        TestContext {
            db: Database::open_in_memory().expect("Failed to create in-memory database"),
            config: Config::default(),
        }
    }

    /// Create an issue in the initial status, created at 09:00 UTC on `day`.
    pub fn create_issue(&mut self, key: &str, day: &str) -> &mut Self {
        let created = date(day).and_hms_opt(9, 0, 0).unwrap().and_utc();
        let mut issue = Issue::new(key.to_string(), "Pending Triage".to_string(), created);
        issue.summary = format!("Summary of {key}");
        self.db.upsert_issue(&issue).expect("Failed to create issue");
        self
    }

    /// Record a status transition at an RFC 3339 instant.
    pub fn transition(&mut self, key: &str, at: &str, to: &str) -> &mut Self {
        self.change(key, at, STATUS_FIELD, to)
    }

    /// Record a change to any field.
    pub fn change(&mut self, key: &str, at: &str, field: &str, to: &str) -> &mut Self {
        let event = TransitionEvent::new(
            key.to_string(),
            instant(at),
            field.to_string(),
            String::new(),
            to.to_string(),
        );
        self.db.insert_event(&event).expect("Failed to record event");
        self
    }
}

pub fn date(day: &str) -> NaiveDate {
    NaiveDate::parse_from_str(day, "%Y-%m-%d").expect("Invalid test date")
}

pub fn instant(at: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(at)
        .expect("Invalid test timestamp")
        .with_timezone(&Utc)
}

pub fn window(from: Option<&str>, to: Option<&str>) -> WindowArgs {
    WindowArgs {
        from: from.map(String::from),
        to: to.map(String::from),
    }
}

#[test]
fn resolve_window_defaults_to_trailing_year() {
    let range = super::resolve_window(&window(None, None), date("2024-07-19")).unwrap();
    assert_eq!(range.start(), date("2023-07-01"));
    assert_eq!(range.end(), date("2024-07-19"));
}

#[test]
fn resolve_window_month_form_is_first_of_month() {
    let range =
        super::resolve_window(&window(Some("2024-02"), Some("2024-03")), date("2024-07-19"))
            .unwrap();
    assert_eq!(range.start(), date("2024-02-01"));
    assert_eq!(range.end(), date("2024-03-01"));
}

#[test]
fn resolve_window_only_start() {
    let range =
        super::resolve_window(&window(Some("2024-07-01"), None), date("2024-07-19")).unwrap();
    assert_eq!(range.len_days(), 19);
}

#[test]
fn resolve_window_rejects_inverted_range() {
    let err = super::resolve_window(
        &window(Some("2024-03-02"), Some("2024-03-01")),
        date("2024-07-19"),
    )
    .unwrap_err();
    assert!(err.to_string().contains("invalid date range"));
}

#[test]
fn resolve_window_rejects_garbage() {
    let err =
        super::resolve_window(&window(Some("last week"), None), date("2024-07-19")).unwrap_err();
    assert!(err.to_string().contains("last week"));
}

#[test]
fn write_atomic_replaces_content_and_leaves_no_temp_file() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("out.csv");
    std::fs::write(&path, "old").unwrap();

    super::write_atomic(&path, "new\n").unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "new\n");
    let entries = std::fs::read_dir(temp.path()).unwrap().count();
    assert_eq!(entries, 1);
}

#[test]
fn write_atomic_into_missing_directory_fails() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("missing").join("out.csv");
    assert!(super::write_atomic(&path, "x").is_err());
    assert!(!path.exists());
}

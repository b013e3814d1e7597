// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SQLite-backed cache of issues and their changelog.
//!
//! The [`Database`] struct holds two record types: issues keyed by tracker
//! key, and field-change events ordered by timestamp then insertion id.

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;

use crate::error::{Error, Result};
use crate::issue::{Issue, TransitionEvent};

/// SQL schema for the cache database.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS issues (
    key TEXT PRIMARY KEY,
    url TEXT NOT NULL,
    type TEXT NOT NULL,
    status TEXT NOT NULL,
    resolution TEXT NOT NULL,
    summary TEXT NOT NULL,
    labels TEXT NOT NULL,
    creator TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

-- Changelog, one row per changed field. Row id doubles as insertion order.
CREATE TABLE IF NOT EXISTS events (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    issue_key TEXT NOT NULL,
    author TEXT NOT NULL,
    timestamp TEXT NOT NULL,
    field TEXT NOT NULL,
    from_value TEXT NOT NULL,
    to_value TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_events_issue_field ON events(issue_key, field, timestamp);
CREATE INDEX IF NOT EXISTS idx_issues_created ON issues(created_at);
"#;

const LABEL_SEPARATOR: &str = ", ";

/// Format a timestamp for storage. Fixed-width UTC so text order is time order.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse an RFC3339 timestamp from the database.
fn parse_timestamp(
    value: &str,
    column: &str,
) -> std::result::Result<DateTime<Utc>, rusqlite::Error> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(Error::CorruptedData(format!(
                    "invalid timestamp '{value}' in column '{column}'"
                ))),
            )
        })
}

fn parse_labels(value: &str) -> Vec<String> {
    if value.is_empty() {
        return Vec::new();
    }
    value.split(LABEL_SEPARATOR).map(str::to_string).collect()
}

fn issue_from_row(row: &Row<'_>) -> std::result::Result<Issue, rusqlite::Error> {
    let labels: String = row.get(6)?;
    let created: String = row.get(8)?;
    let updated: String = row.get(9)?;
    Ok(Issue {
        key: row.get(0)?,
        url: row.get(1)?,
        issue_type: row.get(2)?,
        status: row.get(3)?,
        resolution: row.get(4)?,
        summary: row.get(5)?,
        labels: parse_labels(&labels),
        creator: row.get(7)?,
        created_at: parse_timestamp(&created, "created_at")?,
        updated_at: parse_timestamp(&updated, "updated_at")?,
    })
}

fn event_from_row(row: &Row<'_>) -> std::result::Result<TransitionEvent, rusqlite::Error> {
    let timestamp: String = row.get(3)?;
    Ok(TransitionEvent {
        id: row.get(0)?,
        issue_key: row.get(1)?,
        author: row.get(2)?,
        timestamp: parse_timestamp(&timestamp, "timestamp")?,
        field: row.get(4)?,
        from_value: row.get(5)?,
        to_value: row.get(6)?,
    })
}

/// Unwrap conversion failures carrying one of our errors back into it.
fn lift(err: rusqlite::Error) -> Error {
    match err {
        rusqlite::Error::FromSqlConversionFailure(_, _, inner) => match inner.downcast::<Error>() {
            Ok(ours) => *ours,
            Err(other) => Error::CorruptedData(other.to_string()),
        },
        other => Error::Database(other),
    }
}

const ISSUE_COLUMNS: &str =
    "key, url, type, status, resolution, summary, labels, creator, created_at, updated_at";

const EVENT_COLUMNS: &str = "id, issue_key, author, timestamp, field, from_value, to_value";

/// SQLite database connection with cache operations.
pub struct Database {
    /// The underlying SQLite connection.
    pub conn: Connection,
}

impl Database {
    /// Open a database at the given path, creating the schema if needed.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )?;
        conn.execute_batch(SCHEMA)?;
        Ok(Database { conn })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(Database { conn })
    }

    /// Run `f` inside a transaction, rolling back if it fails.
    pub fn in_transaction<T>(&self, f: impl FnOnce(&Self) -> Result<T>) -> Result<T> {
        self.conn.execute_batch("BEGIN")?;
        match f(self) {
            Ok(value) => {
                self.conn.execute_batch("COMMIT")?;
                Ok(value)
            }
            Err(e) => {
                if let Err(rollback) = self.conn.execute_batch("ROLLBACK") {
                    tracing::warn!("rollback failed: {}", rollback);
                }
                Err(e)
            }
        }
    }

    /// Insert or replace an issue.
    pub fn upsert_issue(&self, issue: &Issue) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO issues (key, url, type, status, resolution, summary,
             labels, creator, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                issue.key,
                issue.url,
                issue.issue_type,
                issue.status,
                issue.resolution,
                issue.summary,
                issue.labels.join(LABEL_SEPARATOR),
                issue.creator,
                format_timestamp(issue.created_at),
                format_timestamp(issue.updated_at),
            ],
        )?;
        Ok(())
    }

    /// Get an issue by key.
    pub fn get_issue(&self, key: &str) -> Result<Issue> {
        let sql = format!("SELECT {ISSUE_COLUMNS} FROM issues WHERE key = ?1");
        let issue = self
            .conn
            .query_row(&sql, params![key], issue_from_row)
            .optional()
            .map_err(lift)?;
        issue.ok_or_else(|| Error::IssueNotFound(key.to_string()))
    }

    /// All cached issues, ordered by key.
    pub fn list_issues(&self) -> Result<Vec<Issue>> {
        let sql = format!("SELECT {ISSUE_COLUMNS} FROM issues ORDER BY key");
        let mut stmt = self.conn.prepare(&sql)?;
        let issues = stmt
            .query_map([], issue_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(lift)?;
        Ok(issues)
    }

    /// Append a field change.
    ///
    /// Events are never merged: two changes at the same instant are both
    /// kept, in insertion order.
    pub fn insert_event(&self, event: &TransitionEvent) -> Result<()> {
        self.conn.execute(
            "INSERT INTO events (issue_key, author, timestamp, field, from_value, to_value)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                event.issue_key,
                event.author,
                format_timestamp(event.timestamp),
                event.field,
                event.from_value,
                event.to_value,
            ],
        )?;
        Ok(())
    }

    /// Drop every stored event of an issue. Returns the number removed.
    pub fn delete_events(&self, key: &str) -> Result<usize> {
        let removed = self
            .conn
            .execute("DELETE FROM events WHERE issue_key = ?1", params![key])?;
        Ok(removed)
    }

    /// Events for one field of one issue, oldest first, ties in insertion order.
    pub fn list_events(&self, key: &str, field: &str) -> Result<Vec<TransitionEvent>> {
        let sql = format!(
            "SELECT {EVENT_COLUMNS} FROM events
             WHERE issue_key = ?1 AND field = ?2
             ORDER BY timestamp, id"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let events = stmt
            .query_map(params![key, field], event_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(lift)?;
        Ok(events)
    }

    /// Every event of one issue, whatever the field, oldest first.
    pub fn list_all_events(&self, key: &str) -> Result<Vec<TransitionEvent>> {
        let sql = format!(
            "SELECT {EVENT_COLUMNS} FROM events
             WHERE issue_key = ?1
             ORDER BY timestamp, id"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let events = stmt
            .query_map(params![key], event_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(lift)?;
        Ok(events)
    }

    /// Total number of stored events for an issue, across all fields.
    pub fn count_events(&self, key: &str) -> Result<usize> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM events WHERE issue_key = ?1",
            params![key],
            |row| row.get(0),
        )?;
        Ok(usize::try_from(count).unwrap_or(0))
    }
}

#[cfg(test)]
#[path = "db_tests.rs"]
mod tests;

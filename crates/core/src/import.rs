// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parsing tracker exports into cache records.
//!
//! Input is JSON Lines, one issue per line, in the tracker's REST shape with
//! the changelog expanded. Every changelog item becomes one event, whatever
//! field it touches.

use std::io::BufRead;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::issue::{Issue, TransitionEvent};

/// Timestamp layout used by the tracker (`2024-03-05T14:07:31.000+0100`).
pub const TRACKER_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

#[derive(Debug, Clone, Deserialize)]
pub struct IssueRecord {
    pub key: String,
    #[serde(rename = "self", default)]
    pub self_url: String,
    pub fields: IssueFields,
    #[serde(default)]
    pub changelog: Option<Changelog>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IssueFields {
    #[serde(default)]
    pub issuetype: Option<Named>,
    pub status: Named,
    #[serde(default)]
    pub resolution: Option<Named>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub creator: Option<Person>,
    pub created: String,
    #[serde(default)]
    pub updated: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Named {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(default)]
    pub display_name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Changelog {
    #[serde(default)]
    pub histories: Vec<History>,
}

/// One changelog entry: a set of field changes made together.
#[derive(Debug, Clone, Deserialize)]
pub struct History {
    #[serde(default)]
    pub author: Option<Person>,
    pub created: String,
    #[serde(default)]
    pub items: Vec<ChangeItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChangeItem {
    pub field: String,
    #[serde(rename = "fromString", default)]
    pub from: Option<String>,
    #[serde(rename = "toString", default)]
    pub to: Option<String>,
}

/// An issue and its changelog, ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedIssue {
    pub issue: Issue,
    pub events: Vec<TransitionEvent>,
}

/// Parse a tracker timestamp, also accepting RFC 3339.
pub fn parse_tracker_timestamp(value: &str, context: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_str(value, TRACKER_TIMESTAMP_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(value))
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|_| Error::InvalidTimestamp {
            value: value.to_string(),
            context: context.to_string(),
        })
}

/// Browse link for `key` on the host that served `self_url`.
pub fn browse_url(self_url: &str, key: &str) -> Result<String> {
    let invalid = || Error::InvalidUrl {
        value: self_url.to_string(),
        key: key.to_string(),
    };
    let (scheme, rest) = self_url.split_once("://").ok_or_else(invalid)?;
    let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
    if scheme.is_empty() || host.is_empty() {
        return Err(invalid());
    }
    Ok(format!("{scheme}://{host}/browse/{key}"))
}

impl IssueRecord {
    /// Convert to cache records. Fails on any unparsable timestamp.
    pub fn into_imported(self) -> Result<ImportedIssue> {
        let key = self.key;
        let fields = self.fields;

        let created_at = parse_tracker_timestamp(&fields.created, &format!("{key} created"))?;
        let updated_at = match fields.updated.as_deref() {
            Some(value) => parse_tracker_timestamp(value, &format!("{key} updated"))?,
            None => created_at,
        };
        let url = if self.self_url.is_empty() {
            String::new()
        } else {
            browse_url(&self.self_url, &key)?
        };

        let mut events = Vec::new();
        for history in self.changelog.unwrap_or_default().histories {
            let timestamp =
                parse_tracker_timestamp(&history.created, &format!("{key} changelog entry"))?;
            if timestamp < created_at {
                tracing::warn!(%key, %timestamp, "changelog entry predates issue creation");
            }
            let author = history.author.map(|a| a.display_name).unwrap_or_default();
            for item in history.items {
                events.push(
                    TransitionEvent::new(
                        key.clone(),
                        timestamp,
                        item.field,
                        item.from.unwrap_or_default(),
                        item.to.unwrap_or_default(),
                    )
                    .with_author(author.clone()),
                );
            }
        }

        let issue = Issue {
            url,
            issue_type: fields.issuetype.map(|t| t.name).unwrap_or_default(),
            status: fields.status.name,
            resolution: fields.resolution.map(|r| r.name).unwrap_or_default(),
            summary: fields.summary,
            labels: fields.labels,
            creator: fields.creator.map(|c| c.display_name).unwrap_or_default(),
            created_at,
            updated_at,
            key,
        };
        Ok(ImportedIssue { issue, events })
    }
}

/// Parse one line. Blank lines yield `None`.
pub fn parse_line(line: &str, number: usize) -> Result<Option<ImportedIssue>> {
    if line.trim().is_empty() {
        return Ok(None);
    }
    let record: IssueRecord = serde_json::from_str(line).map_err(|e| Error::ParseLine {
        line: number,
        reason: e.to_string(),
    })?;
    record
        .into_imported()
        .map(Some)
        .map_err(|e| Error::ParseLine {
            line: number,
            reason: e.to_string(),
        })
}

/// Read every record from a JSON Lines stream. Line numbers start at 1.
pub fn read_records<R: BufRead>(reader: R) -> Result<Vec<ImportedIssue>> {
    let mut records = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(record) = parse_line(&line, index + 1)? {
            records.push(record);
        }
    }
    Ok(records)
}

#[cfg(test)]
#[path = "import_tests.rs"]
mod tests;

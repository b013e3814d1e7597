// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::Serialize;
use strata_core::{day_key, Database, Issue};

use crate::cli::OutputFormat;
use crate::display::{csv_field, format_issue_line};
use crate::error::Result;

use super::open_db;

/// JSON representation of a cached issue.
#[derive(Serialize)]
struct IssueJson<'a> {
    key: &'a str,
    url: &'a str,
    #[serde(rename = "type")]
    issue_type: &'a str,
    status: &'a str,
    resolution: &'a str,
    summary: &'a str,
    labels: &'a [String],
    creator: &'a str,
    created: String,
    events: usize,
}

pub fn run(output: OutputFormat, cache: Option<&str>) -> Result<()> {
    let (db, _) = open_db(cache)?;
    print!("{}", run_impl(&db, output)?);
    Ok(())
}

/// Internal implementation that accepts db for testing.
pub(crate) fn run_impl(db: &Database, output: OutputFormat) -> Result<String> {
    let issues = db.list_issues()?;
    let mut out = String::new();

    match output {
        OutputFormat::Text => {
            if issues.is_empty() {
                out.push_str("No issues cached\n");
            }
            for issue in &issues {
                out.push_str(&format_issue_line(issue));
                out.push('\n');
            }
        }
        OutputFormat::Csv => {
            out.push_str("key,created,status,type,summary\n");
            for issue in &issues {
                let fields = [
                    csv_field(&issue.key),
                    day_key(issue.created_day()),
                    csv_field(&issue.status),
                    csv_field(&issue.issue_type),
                    csv_field(&issue.summary),
                ];
                out.push_str(&fields.join(","));
                out.push('\n');
            }
        }
        OutputFormat::Json => {
            let rows = issues
                .iter()
                .map(|issue| to_json(db, issue))
                .collect::<Result<Vec<_>>>()?;
            out.push_str(&serde_json::to_string_pretty(&rows)?);
            out.push('\n');
        }
    }
    Ok(out)
}

fn to_json<'a>(db: &Database, issue: &'a Issue) -> Result<IssueJson<'a>> {
    Ok(IssueJson {
        key: &issue.key,
        url: &issue.url,
        issue_type: &issue.issue_type,
        status: &issue.status,
        resolution: &issue.resolution,
        summary: &issue.summary,
        labels: &issue.labels,
        creator: &issue.creator,
        created: day_key(issue.created_day()),
        events: db.count_events(&issue.key)?,
    })
}

#[cfg(test)]
#[path = "issues_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::NaiveDate;
use strata_core::{day_key, Issue, StatusSeries, TransitionEvent};

use crate::error::Result;

/// Width of the day column (`YYYY-MM-DD`).
const DAY_WIDTH: usize = 10;

/// Render a series as a table: one row per day, one column per category,
/// then the total.
///
/// ```text
/// day         Pending Triage  Closed  Other  total
/// 2024-03-01               4       1      0      5
/// ```
pub fn render_series_text(series: &StatusSeries) -> String {
    let headers: Vec<&str> = series.labels().chain(["total"]).collect();
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            let widest = (0..series.days.len())
                .map(|row| cell(series, row, col).len())
                .max()
                .unwrap_or(0);
            header.len().max(widest)
        })
        .collect();

    let mut out = String::new();
    out.push_str(&format!("{:<DAY_WIDTH$}", "day"));
    for (header, width) in headers.iter().zip(&widths) {
        out.push_str(&format!("  {:>width$}", header, width = width));
    }
    out.push('\n');

    for (row, day) in series.days.iter().enumerate() {
        out.push_str(&format!("{:<DAY_WIDTH$}", day));
        for (col, width) in widths.iter().enumerate() {
            out.push_str(&format!("  {:>width$}", cell(series, row, col), width = width));
        }
        out.push('\n');
    }
    out
}

/// Count at `row` for series `col`, where the column after the last series
/// is the total.
fn cell(series: &StatusSeries, row: usize, col: usize) -> String {
    let value = match series.series.get(col) {
        Some(s) => s.counts.get(row),
        None => series.totals.get(row),
    };
    value.copied().unwrap_or(0).to_string()
}

/// Render a series as CSV with header `day,<categories...>,total`.
pub fn render_series_csv(series: &StatusSeries) -> String {
    let mut out = String::new();
    let header: Vec<String> = ["day"]
        .into_iter()
        .chain(series.labels())
        .chain(["total"])
        .map(csv_field)
        .collect();
    out.push_str(&header.join(","));
    out.push('\n');

    for (row, day) in series.days.iter().enumerate() {
        let mut fields = vec![csv_field(day)];
        fields.extend(series.row(row).iter().map(u64::to_string));
        fields.push(series.totals.get(row).copied().unwrap_or(0).to_string());
        out.push_str(&fields.join(","));
        out.push('\n');
    }
    out
}

/// Render a series as pretty-printed JSON.
pub fn render_series_json(series: &StatusSeries) -> Result<String> {
    let mut json = serde_json::to_string_pretty(series)?;
    json.push('\n');
    Ok(json)
}

/// Quote a CSV field when it contains a delimiter, quote or line break.
pub fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Format an issue for listings.
///
/// Output format: `KEY  created-day  [status]  summary`
pub fn format_issue_line(issue: &Issue) -> String {
    format!(
        "{}  {}  [{}]  {}",
        issue.key,
        day_key(issue.created_day()),
        issue.status,
        issue.summary
    )
}

/// Format an imported issue.
///
/// Output format: `KEY@created-day - summary [status] (N events)`
pub fn format_import_line(issue: &Issue, events: usize) -> String {
    format!(
        "{}@{} - {} [{}] ({} {})",
        issue.key,
        day_key(issue.created_day()),
        issue.summary,
        issue.status,
        events,
        if events == 1 { "event" } else { "events" }
    )
}

/// Format a stored transition.
///
/// Output format: `2024-03-06 10:00  field: from -> to  (author)`
pub fn format_event(event: &TransitionEvent) -> String {
    let from = if event.from_value.is_empty() {
        "(none)"
    } else {
        event.from_value.as_str()
    };
    let to = if event.to_value.is_empty() {
        "(none)"
    } else {
        event.to_value.as_str()
    };
    let mut line = format!(
        "{}  {}: {} -> {}",
        event.timestamp.format("%Y-%m-%d %H:%M"),
        event.field,
        from,
        to
    );
    if !event.author.is_empty() {
        line.push_str(&format!("  ({})", event.author));
    }
    line
}

/// Format one reconstructed day.
pub fn format_replay_day(day: NaiveDate, label: &str) -> String {
    format!("{}  {}", day_key(day), label)
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;

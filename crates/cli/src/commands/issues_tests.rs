// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::commands::testing::TestContext;

fn populated() -> TestContext {
    let mut ctx = TestContext::new();
    ctx.create_issue("IPL-2", "2024-03-02")
        .create_issue("IPL-1", "2024-03-01")
        .transition("IPL-1", "2024-03-03T10:00:00Z", "Accepted")
        .change("IPL-1", "2024-03-03T11:00:00Z", "assignee", "Sam");
    ctx
}

#[test]
fn text_lists_issues_by_key() {
    let ctx = populated();
    let out = run_impl(&ctx.db, OutputFormat::Text).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        vec![
            "IPL-1  2024-03-01  [Pending Triage]  Summary of IPL-1",
            "IPL-2  2024-03-02  [Pending Triage]  Summary of IPL-2",
        ]
    );
}

#[test]
fn text_empty_cache() {
    let ctx = TestContext::new();
    assert_eq!(run_impl(&ctx.db, OutputFormat::Text).unwrap(), "No issues cached\n");
}

#[test]
fn csv_has_header() {
    let ctx = populated();
    let out = run_impl(&ctx.db, OutputFormat::Csv).unwrap();
    let mut lines = out.lines();
    assert_eq!(lines.next(), Some("key,created,status,type,summary"));
    assert_eq!(
        lines.next(),
        Some("IPL-1,2024-03-01,Pending Triage,,Summary of IPL-1")
    );
}

#[test]
fn json_includes_event_counts() {
    let ctx = populated();
    let out = run_impl(&ctx.db, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value[0]["key"], "IPL-1");
    assert_eq!(value[0]["events"], 2);
    assert_eq!(value[1]["events"], 0);
    assert_eq!(value[0]["created"], "2024-03-01");
}

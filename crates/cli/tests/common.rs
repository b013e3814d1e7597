// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub fn strata() -> Command {
    let mut cmd = cargo_bin_cmd!("strata");
    cmd.env_remove("STRATA_CACHE")
        .env_remove("STRATA_LOG")
        .env_remove("STRATA_TIMINGS");
    cmd
}

/// Helper to create an initialized temp directory
pub fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    strata()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .success();
    temp
}

/// One export line in the tracker's REST shape.
///
/// `transitions` are `(timestamp, from, to)` status changes.
pub fn export_line(key: &str, created: &str, transitions: &[(&str, &str, &str)]) -> String {
    let histories: Vec<String> = transitions
        .iter()
        .map(|(at, from, to)| {
            format!(
                r#"{{"author":{{"displayName":"Sam Ortiz"}},"created":"{at}","items":[{{"field":"status","fromString":"{from}","toString":"{to}"}}]}}"#
            )
        })
        .collect();
    format!(
        r#"{{"key":"{key}","self":"https://tracker.example.com/rest/api/2/issue/{key}","fields":{{"issuetype":{{"name":"Bug"}},"status":{{"name":"Accepted"}},"resolution":null,"summary":"Summary of {key}","labels":[],"creator":{{"displayName":"Dana Reyes"}},"created":"{created}","updated":"{created}"}},"changelog":{{"histories":[{}]}}}}"#,
        histories.join(",")
    )
}

/// Export with three issues around the 2024 leap day.
pub fn sample_export() -> String {
    [
        export_line(
            "IPL-1",
            "2024-02-10T09:00:00.000+0000",
            &[("2024-02-20T10:00:00.000+0000", "Pending Triage", "Blocked")],
        ),
        export_line(
            "IPL-2",
            "2024-02-28T09:00:00.000+0000",
            &[("2024-02-29T15:00:00.000+0000", "Pending Triage", "Closed")],
        ),
        export_line(
            "IPL-3",
            "2024-03-01T09:00:00.000+0000",
            &[("2024-03-01T12:00:00.000+0000", "Pending Triage", "Waiting for Vendor")],
        ),
    ]
    .join("\n")
}

/// Initialized project with [`sample_export`] imported.
pub fn imported_temp() -> TempDir {
    let temp = init_temp();
    let path = temp.path().join("export.jsonl");
    std::fs::write(&path, sample_export()).unwrap();
    strata()
        .arg("import")
        .arg(&path)
        .current_dir(temp.path())
        .assert()
        .success();
    temp
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

mod common;
use common::*;

#[test]
fn test_import_from_file() {
    let temp = init_temp();
    let path = temp.path().join("export.jsonl");
    std::fs::write(&path, sample_export()).unwrap();

    strata()
        .arg("import")
        .arg(&path)
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "IPL-1@2024-02-10 - Summary of IPL-1 [Accepted] (1 event)",
        ))
        .stdout(predicate::str::contains("Imported 3 issues (3 events)"));

    strata()
        .arg("issues")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("IPL-3  2024-03-01  [Accepted]"));
}

#[test]
fn test_import_from_stdin() {
    let temp = init_temp();

    strata()
        .args(["import", "-"])
        .write_stdin(sample_export())
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 3 issues"));
}

#[test]
fn test_import_bad_timestamp_writes_nothing() {
    let temp = init_temp();
    let input = format!(
        "{}\n{}",
        export_line("IPL-1", "2024-02-10T09:00:00.000+0000", &[]),
        export_line("IPL-2", "10 Feb 2024", &[]),
    );

    strata()
        .args(["import", "-"])
        .write_stdin(input)
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"))
        .stderr(predicate::str::contains("IPL-2"));

    strata()
        .arg("issues")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No issues cached"));
}

#[test]
fn test_import_missing_file() {
    let temp = init_temp();

    strata()
        .args(["import", "nope.jsonl"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot open nope.jsonl"));
}

#[test]
fn test_log_shows_transitions() {
    let temp = imported_temp();

    strata()
        .args(["log", "IPL-2"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "2024-02-29 15:00  status: Pending Triage -> Closed  (Sam Ortiz)",
        ));
}

#[test]
fn test_log_unknown_issue() {
    let temp = imported_temp();

    strata()
        .args(["log", "IPL-99"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("issue not found: IPL-99"));
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use std::error::Error as _;
use yare::parameterized;

#[parameterized(
    issue_not_found = { Error::IssueNotFound("IPL-1".into()), "IPL-1" },
    invalid_date = { Error::InvalidDate { value: "2024-13".into() }, "2024-13" },
    invalid_taxonomy = { Error::InvalidTaxonomy("empty".into()), "empty" },
    invalid_url = { Error::InvalidUrl { value: "nope".into(), key: "IPL-2".into() }, "IPL-2" },
    parse_line = { Error::ParseLine { line: 7, reason: "bad".into() }, "line 7" },
)]
fn error_display_contains(err: Error, expected: &str) {
    assert!(err.to_string().contains(expected));
}

#[test]
fn invalid_date_range_names_both_ends() {
    let err = Error::InvalidDateRange {
        start: NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
        end: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
    };
    let msg = err.to_string();
    assert!(msg.contains("2024-03-02"));
    assert!(msg.contains("2024-03-01"));
}

#[test]
fn event_lookup_keeps_source() {
    let err = Error::EventLookup {
        key: "IPL-9".into(),
        field: "status".into(),
        start: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        end: NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
        source: Box::new(Error::CorruptedData("bad row".into())),
    };
    let msg = err.to_string();
    assert!(msg.contains("IPL-9"));
    assert!(msg.contains("status"));
    assert!(msg.contains("window 2024-02-01 to 2024-02-29"));
    assert!(err.source().unwrap().to_string().contains("bad row"));
}

#[test]
fn error_from_io() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn error_from_json() {
    let json_err = serde_json::from_str::<()>("invalid").unwrap_err();
    let err: Error = json_err.into();
    assert!(matches!(err, Error::Json(_)));
}

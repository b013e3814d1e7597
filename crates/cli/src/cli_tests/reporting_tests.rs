// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use super::*;
use yare::parameterized;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(args)
}

#[test]
fn test_series_defaults() {
    let cli = parse(&["strata", "series"]).unwrap();
    match cli.command {
        Command::Series {
            window,
            output,
            out,
        } => {
            assert_eq!(window, WindowArgs::default());
            assert_eq!(output, OutputFormat::Text);
            assert!(out.is_none());
        }
        other => panic!("Expected Series command, got {other:?}"),
    }
}

#[test]
fn test_series_window_and_file() {
    let cli = parse(&[
        "strata", "series", "2024-01", "2024-03-15", "-o", "csv", "--out", "s.csv",
    ])
    .unwrap();
    match cli.command {
        Command::Series {
            window,
            output,
            out,
        } => {
            assert_eq!(window.from.as_deref(), Some("2024-01"));
            assert_eq!(window.to.as_deref(), Some("2024-03-15"));
            assert_eq!(output, OutputFormat::Csv);
            assert_eq!(out.as_deref(), Some("s.csv"));
        }
        other => panic!("Expected Series command, got {other:?}"),
    }
}

#[parameterized(
    text = { "text", OutputFormat::Text },
    json = { "json", OutputFormat::Json },
    csv = { "csv", OutputFormat::Csv },
)]
fn test_series_output_formats(value: &str, expected: OutputFormat) {
    let cli = parse(&["strata", "series", "--output", value]).unwrap();
    match cli.command {
        Command::Series { output, .. } => assert_eq!(output, expected),
        other => panic!("Expected Series command, got {other:?}"),
    }
}

#[test]
fn test_series_rejects_unknown_format() {
    assert!(parse(&["strata", "series", "-o", "svg"]).is_err());
}

#[test]
fn test_series_rejects_three_dates() {
    assert!(parse(&["strata", "series", "2024-01", "2024-02", "2024-03"]).is_err());
}

#[test]
fn test_replay_requires_key() {
    assert!(parse(&["strata", "replay"]).is_err());
}

#[test]
fn test_replay_with_window() {
    let cli = parse(&["strata", "replay", "IPL-1", "2024-01-01"]).unwrap();
    match cli.command {
        Command::Replay { key, window } => {
            assert_eq!(key, "IPL-1");
            assert_eq!(window.from.as_deref(), Some("2024-01-01"));
            assert!(window.to.is_none());
        }
        other => panic!("Expected Replay command, got {other:?}"),
    }
}

#[test]
fn test_log_all_flag() {
    let cli = parse(&["strata", "log", "IPL-1", "--all"]).unwrap();
    match cli.command {
        Command::Log { key, all } => {
            assert_eq!(key, "IPL-1");
            assert!(all);
        }
        other => panic!("Expected Log command, got {other:?}"),
    }
}

#[test]
fn test_issues_json() {
    let cli = parse(&["strata", "issues", "-o", "json"]).unwrap();
    assert!(matches!(
        cli.command,
        Command::Issues {
            output: OutputFormat::Json
        }
    ));
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::NaiveDate;
use strata_core::{replay, Database, DateRange, EventStore};

use crate::cli::WindowArgs;
use crate::config::Config;
use crate::display::format_replay_day;
use crate::error::Result;

use super::{open_db, resolve_window, taxonomy, today};

pub fn run(key: &str, window: WindowArgs, cache: Option<&str>) -> Result<()> {
    let window = resolve_window(&window, today())?;
    let (db, config) = open_db(cache)?;

    let days = run_impl(&db, &config, key, window)?;
    if days.is_empty() {
        println!(
            "{} has no days between {} and {}",
            key,
            window.start(),
            window.end()
        );
    }
    for (day, label) in &days {
        println!("{}", format_replay_day(*day, label));
    }
    Ok(())
}

/// Internal implementation that accepts db for testing.
pub(crate) fn run_impl(
    db: &Database,
    config: &Config,
    key: &str,
    window: DateRange,
) -> Result<Vec<(NaiveDate, String)>> {
    let taxonomy = taxonomy(config)?;
    let issue = db.get_issue(key)?;
    let events = db.events(key, &config.field)?;

    Ok(replay(&issue, &events, &taxonomy, window)
        .map(|(day, category)| (day, taxonomy.label(category).to_string()))
        .collect())
}

#[cfg(test)]
#[path = "replay_tests.rs"]
mod tests;

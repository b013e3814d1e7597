// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use strata_core::{Database, TransitionEvent};

use crate::config::Config;
use crate::display::format_event;
use crate::error::Result;

use super::open_db;

pub fn run(key: &str, all: bool, cache: Option<&str>) -> Result<()> {
    let (db, config) = open_db(cache)?;
    let events = run_impl(&db, &config, key, all)?;

    if events.is_empty() {
        println!("No events for {}", key);
    } else {
        for event in &events {
            println!("{}", format_event(event));
        }
    }
    Ok(())
}

/// Internal implementation that accepts db for testing.
pub(crate) fn run_impl(
    db: &Database,
    config: &Config,
    key: &str,
    all: bool,
) -> Result<Vec<TransitionEvent>> {
    // Verify issue exists first
    db.get_issue(key)?;

    let events = if all {
        db.list_all_events(key)?
    } else {
        db.list_events(key, &config.field)?
    };
    Ok(events)
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;

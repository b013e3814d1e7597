// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use strata_core::{compute_daily_status_series, Database, DateRange, StatusSeries};

use crate::cli::{OutputFormat, WindowArgs};
use crate::config::Config;
use crate::display::{render_series_csv, render_series_json, render_series_text};
use crate::error::{Error, Result};

use super::{open_db, resolve_window, taxonomy, today, write_atomic};

pub fn run(
    window: WindowArgs,
    output: OutputFormat,
    out: Option<String>,
    cache: Option<&str>,
) -> Result<()> {
    if out.as_deref().is_some_and(|p| p.trim().is_empty()) {
        return Err(Error::OutputPathEmpty);
    }
    let window = resolve_window(&window, today())?;
    let (db, config) = open_db(cache)?;

    let rendered = run_impl(&db, &config, window, output)?;
    match out {
        Some(path) => {
            crate::time_phase!("series::write", { write_atomic(Path::new(&path), &rendered)? });
            eprintln!(
                "Wrote {} days ({} to {}) to {}",
                window.len_days(),
                window.start(),
                window.end(),
                path
            );
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

/// Internal implementation that accepts db for testing.
///
/// Returns the fully rendered output; nothing is written here.
pub(crate) fn run_impl(
    db: &Database,
    config: &Config,
    window: DateRange,
    output: OutputFormat,
) -> Result<String> {
    let series = compute(db, config, window)?;
    render(&series, output)
}

pub(crate) fn compute(db: &Database, config: &Config, window: DateRange) -> Result<StatusSeries> {
    let taxonomy = taxonomy(config)?;
    let series = crate::time_phase!("series::compute", {
        compute_daily_status_series(db, &taxonomy, window, &config.field)?
    });
    Ok(series)
}

fn render(series: &StatusSeries, output: OutputFormat) -> Result<String> {
    match output {
        OutputFormat::Text => Ok(render_series_text(series)),
        OutputFormat::Csv => Ok(render_series_csv(series)),
        OutputFormat::Json => render_series_json(series),
    }
}

#[cfg(test)]
#[path = "series_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod import;
pub mod init;
pub mod issues;
pub mod log;
pub mod replay;
pub mod series;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Utc};
use strata_core::{parse_day, Database, DateRange, Taxonomy};

use crate::cli::WindowArgs;
use crate::config::{find_work_dir, get_db_path, Config};
use crate::error::{Error, Result};

/// Helper to open the database from the current context.
///
/// `cache` overrides the configured location. With an override, a project
/// directory is optional and the default configuration applies.
pub fn open_db(cache: Option<&str>) -> Result<(Database, Config)> {
    let (config, db_path) = match (find_work_dir(), cache) {
        (Ok(work_dir), cache) => {
            let config = Config::load(&work_dir)?;
            let db_path = match cache {
                Some(path) => PathBuf::from(path),
                None => get_db_path(&work_dir, &config),
            };
            (config, db_path)
        }
        (Err(Error::NotInitialized), Some(path)) => (Config::default(), PathBuf::from(path)),
        (Err(e), _) => return Err(e),
    };
    tracing::debug!(path = %db_path.display(), "opening cache");
    let db = crate::time_phase!("db::open", { Database::open(&db_path)? });
    Ok((db, config))
}

/// Taxonomy from the loaded configuration.
pub fn taxonomy(config: &Config) -> Result<Taxonomy> {
    config.taxonomy.build()
}

/// Resolve the window arguments against `today`.
///
/// A missing start is the first of the month one year before `today`; a
/// missing end is `today`.
pub fn resolve_window(args: &WindowArgs, today: NaiveDate) -> Result<DateRange> {
    let default = DateRange::trailing_year(today);
    let start = match &args.from {
        Some(value) => parse_day(value)?,
        None => default.start(),
    };
    let end = match &args.to {
        Some(value) => parse_day(value)?,
        None => today,
    };
    Ok(DateRange::new(start, end)?)
}

/// Today's date in UTC, the calendar every day key uses.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Write `content` to `path` through a sibling temporary file so that a
/// partially written file never replaces the destination.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or(Error::OutputPathEmpty)?;
    let tmp = path.with_file_name(format!(".{}.{}.tmp", file_name, std::process::id()));
    std::fs::write(&tmp, content)?;
    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(e.into());
    }
    Ok(())
}

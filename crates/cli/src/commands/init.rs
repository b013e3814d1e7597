// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::{Path, PathBuf};

use strata_core::Database;

use crate::config::{get_db_path, init_work_dir, write_gitignore, Config};
use crate::error::Result;

pub fn run(path: Option<String>, cache_path: Option<String>) -> Result<()> {
    let target_path = match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir()?,
    };

    let db_path = run_impl(&target_path, cache_path)?;

    println!("Initialized strata project at {}", target_path.display());
    println!("Cache: {}", db_path.display());
    Ok(())
}

/// Create `.strata/` under `target_path` and an empty cache. Returns the
/// cache path.
pub(crate) fn run_impl(target_path: &Path, cache_path: Option<String>) -> Result<PathBuf> {
    let work_dir = init_work_dir(target_path, cache_path)?;
    write_gitignore(&work_dir)?;

    let config = Config::load(&work_dir)?;
    let db_path = get_db_path(&work_dir, &config);
    Database::open(&db_path)?;

    tracing::info!(work_dir = %work_dir.display(), "initialized project");
    Ok(db_path)
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;

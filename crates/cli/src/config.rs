// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration management.
//!
//! Configuration is stored in `.strata/config.toml` and includes:
//! - `cache`: Optional path to the SQLite cache (default `.strata/cache.db`)
//! - `field`: The changelog field whose history is replayed (default `status`)
//! - `[taxonomy]`: Category labels and the initial, terminal and overflow designations

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use strata_core::taxonomy::{DEFAULT_CATEGORIES, DEFAULT_INITIAL, DEFAULT_OVERFLOW, DEFAULT_TERMINAL};
use strata_core::{Taxonomy, STATUS_FIELD};

use crate::error::{Error, Result};

const WORK_DIR_NAME: &str = ".strata";
const CONFIG_FILE_NAME: &str = "config.toml";
const DB_FILE_NAME: &str = "cache.db";
const GITIGNORE_FILE_NAME: &str = ".gitignore";

/// Project configuration stored in `.strata/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Optional path for the database (relative to project root or absolute).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache: Option<String>,
    /// Changelog field to replay.
    #[serde(default = "default_field")]
    pub field: String,
    #[serde(default)]
    pub taxonomy: TaxonomyConfig,
}

/// The `[taxonomy]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxonomyConfig {
    /// Canonical labels in display order.
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
    /// Label for statuses outside `categories`.
    #[serde(default = "default_overflow")]
    pub overflow: String,
    /// Status assumed before the first transition.
    #[serde(default = "default_initial")]
    pub initial: String,
    /// Status that ends an issue's replay.
    #[serde(default = "default_terminal")]
    pub terminal: String,
    /// Emit the overflow category as its own series.
    #[serde(default = "default_true")]
    pub display_overflow: bool,
    /// Start from the cached status when an issue has no transitions at all.
    #[serde(default)]
    pub fallback_to_current_status: bool,
}

fn default_field() -> String {
    STATUS_FIELD.to_string()
}

fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect()
}

fn default_overflow() -> String {
    DEFAULT_OVERFLOW.to_string()
}

fn default_initial() -> String {
    DEFAULT_INITIAL.to_string()
}

fn default_terminal() -> String {
    DEFAULT_TERMINAL.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for TaxonomyConfig {
    fn default() -> Self {
        TaxonomyConfig {
            categories: default_categories(),
            overflow: default_overflow(),
            initial: default_initial(),
            terminal: default_terminal(),
            display_overflow: true,
            fallback_to_current_status: false,
        }
    }
}

impl TaxonomyConfig {
    /// Build the validated taxonomy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the labels do not form a valid taxonomy.
    pub fn build(&self) -> Result<Taxonomy> {
        let taxonomy = Taxonomy::new(
            self.categories.clone(),
            self.overflow.clone(),
            &self.initial,
            &self.terminal,
        )
        .map_err(|e| Error::Config(e.to_string()))?;
        Ok(taxonomy
            .with_display_overflow(self.display_overflow)
            .with_fallback_to_current_status(self.fallback_to_current_status))
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            cache: None,
            field: default_field(),
            taxonomy: TaxonomyConfig::default(),
        }
    }
}

impl Config {
    /// Creates a default config with an optional cache location.
    pub fn new(cache: Option<String>) -> Self {
        Config {
            cache,
            ..Config::default()
        }
    }

    /// Loads and validates configuration from the given `.strata/` directory.
    pub fn load(work_dir: &Path) -> Result<Self> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the tracked field and taxonomy.
    pub fn validate(&self) -> Result<()> {
        if self.field.trim().is_empty() {
            return Err(Error::Config("field cannot be empty".to_string()));
        }
        self.taxonomy.build().map(|_| ())
    }

    /// Saves configuration to the given `.strata/` directory.
    pub fn save(&self, work_dir: &Path) -> Result<()> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(&config_path, content)?;
        Ok(())
    }
}

/// Find the .strata directory by walking up from the current directory
pub fn find_work_dir() -> Result<PathBuf> {
    let mut current = std::env::current_dir()?;
    loop {
        let work_dir = current.join(WORK_DIR_NAME);
        if work_dir.is_dir() {
            return Ok(work_dir);
        }
        if !current.pop() {
            return Err(Error::NotInitialized);
        }
    }
}

/// Get the database path from config
pub fn get_db_path(work_dir: &Path, config: &Config) -> PathBuf {
    match &config.cache {
        Some(cache) => {
            let cache_path = Path::new(cache);
            if cache_path.is_absolute() {
                cache_path.to_path_buf()
            } else {
                // Relative to work_dir's parent (the project root)
                work_dir.parent().unwrap_or(work_dir).join(cache)
            }
        }
        None => work_dir.join(DB_FILE_NAME),
    }
}

/// Initialize a new .strata directory at the given path
pub fn init_work_dir(path: &Path, cache: Option<String>) -> Result<PathBuf> {
    let work_dir = path.join(WORK_DIR_NAME);

    if work_dir.join(CONFIG_FILE_NAME).exists() {
        return Err(Error::AlreadyInitialized(work_dir.display().to_string()));
    }

    fs::create_dir_all(&work_dir)?;

    let config = Config::new(cache);
    config.save(&work_dir)?;

    Ok(work_dir)
}

/// Write a .gitignore file to the work directory.
///
/// The cache is rebuilt from tracker exports, so it is never committed.
pub fn write_gitignore(work_dir: &Path) -> Result<()> {
    let gitignore_path = work_dir.join(GITIGNORE_FILE_NAME);
    let content = "# Local issue cache\ncache.db\ncache.db-wal\ncache.db-shm\n";
    fs::write(&gitignore_path, content)?;
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

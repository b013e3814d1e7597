// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! strata - daily issue status counts from tracker changelogs.
//!
//! This crate provides the command line front end over [`strata_core`]:
//! project configuration, the cache location, output rendering and the
//! command dispatch used by the `strata` binary.
//!
//! # Main Components
//!
//! - [`Config`] - Project configuration (cache location, tracked field, taxonomy)
//! - [`Cli`] / [`Command`] - Argument parsing
//! - [`Error`] - Error types for all operations
//!
//! # Initialization
//!
//! Use [`init_work_dir`] to create a new `.strata/` directory, then open the cache:
//!
//! ```rust,ignore
//! use strata::{find_work_dir, get_db_path, init_work_dir, Config};
//! use strata_core::Database;
//!
//! // Initialize a new project
//! let work_dir = init_work_dir(Path::new("."), None)?;
//!
//! // Later, find and open an existing project
//! let work_dir = find_work_dir()?;
//! let config = Config::load(&work_dir)?;
//! let db = Database::open(&get_db_path(&work_dir, &config))?;
//! ```

mod cli;
mod commands;
mod display;
pub mod env;
pub mod timings;

pub mod config;
pub mod error;

pub use cli::{Cli, Command, OutputFormat, WindowArgs};
pub use config::{find_work_dir, get_db_path, init_work_dir, Config, TaxonomyConfig};
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a parsed command line. This is the main entry point for library
/// users and provides a testable way to run commands without process execution.
pub fn run(cli: Cli) -> Result<()> {
    if let Some(dir) = &cli.directory {
        std::env::set_current_dir(dir)?;
    }
    let cache = cli.cache.as_deref();

    match cli.command {
        Command::Series {
            window,
            output,
            out,
        } => commands::series::run(window, output, out, cache),
        Command::Replay { key, window } => commands::replay::run(&key, window, cache),
        Command::Log { key, all } => commands::log::run(&key, all, cache),
        Command::Issues { output } => commands::issues::run(output, cache),
        Command::Init { path, cache_path } => commands::init::run(path, cache_path),
        Command::Import { file } => commands::import::run(file, cache),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "strata", &mut std::io::stdout());
            Ok(())
        }
    }
}

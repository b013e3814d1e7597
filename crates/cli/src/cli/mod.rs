// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

pub use args::WindowArgs;

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

// Custom help template that groups commands into sections
const HELP_TEMPLATE: &str = "{about-with-newline}
{usage-heading} {usage}

{before-help}Options:
{options}{after-help}";

const COMMANDS_HELP: &str = "\
Reporting:
  series      Daily issue counts per status over a window
  replay      Day-by-day status of one issue
  log         Stored transitions of one issue
  issues      List cached issues

Setup:
  init        Initialize a project
  import      Import a tracker export into the cache
  completion  Generate shell completions
";

const QUICKSTART_HELP: &str = "\
Get started:
  strata init                        Initialize in current directory
  strata import export.jsonl         Load issues and changelogs
  strata series 2024-01 2024-06      Daily counts for the first half of 2024
  strata series -o csv --out s.csv   Write the last year as CSV";

#[derive(Parser)]
#[command(name = "strata")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Reconstruct daily issue status counts from tracker changelogs")]
#[command(
    long_about = "Reconstruct daily issue status counts from tracker changelogs.\n\n\
    Issues and their transition history are cached locally, then replayed day by day \
    to report how many issues sat in each status on every day of a window."
)]
#[command(help_template = HELP_TEMPLATE)]
#[command(before_help = COMMANDS_HELP)]
#[command(after_help = QUICKSTART_HELP)]
pub struct Cli {
    /// Run as if strata was started in <path>
    #[arg(short = 'C', long = "directory", global = true, value_name = "path")]
    pub directory: Option<String>,

    /// Cache database to use instead of the configured one
    #[arg(long, global = true, env = "STRATA_CACHE", value_name = "path")]
    pub cache: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    // ─────────────────────────────────────────────────────────────────────────
    // Reporting
    // ─────────────────────────────────────────────────────────────────────────
    /// Daily issue counts per status over a window
    #[command(after_help = "Examples:\n  \
        strata series                          Last year up to today\n  \
        strata series 2024-02 2024-03-15       From Feb 1st to Mar 15th\n  \
        strata series 2024-01-01 -o json       From Jan 1st to today as JSON\n  \
        strata series -o csv --out daily.csv   Write CSV to a file")]
    Series {
        #[command(flatten)]
        window: WindowArgs,

        /// Output format
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,

        /// Write to a file instead of stdout (written only on success)
        #[arg(long, value_name = "PATH")]
        out: Option<String>,
    },

    /// Day-by-day reconstructed status of one issue
    #[command(arg_required_else_help = true)]
    Replay {
        /// Issue key
        key: String,

        #[command(flatten)]
        window: WindowArgs,
    },

    /// Stored transitions of one issue's tracked field
    #[command(arg_required_else_help = true)]
    Log {
        /// Issue key
        key: String,

        /// Show every changelog field, not only the tracked one
        #[arg(long, short)]
        all: bool,
    },

    /// List cached issues
    Issues {
        /// Output format
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Setup
    // ─────────────────────────────────────────────────────────────────────────
    /// Initialize a project in the current directory (or specified path)
    Init {
        /// Path to initialize (defaults to current directory)
        #[arg(long)]
        path: Option<String>,

        /// Cache database location, relative to the project root or absolute
        #[arg(long = "cache-path", value_name = "path")]
        cache_path: Option<String>,
    },

    /// Import a tracker export (JSON Lines with changelogs) into the cache
    #[command(after_help = "Examples:\n  \
        strata import export.jsonl     Import from file\n  \
        strata import -                Import from stdin")]
    Import {
        /// Input file (use '-' or omit for stdin)
        #[arg(value_name = "FILE")]
        file: Option<String>,
    },

    /// Generate shell completions
    #[command(arg_required_else_help = true)]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;

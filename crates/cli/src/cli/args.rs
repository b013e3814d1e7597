// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! These structs are used with `#[command(flatten)]` by every command that
//! takes a reporting window.

use clap::Args;

/// Inclusive reporting window.
#[derive(Args, Clone, Debug, Default, PartialEq, Eq)]
pub struct WindowArgs {
    /// First day (YYYY-MM-DD, or YYYY-MM for the first of the month).
    /// Defaults to the first of the month one year ago
    #[arg(value_name = "FROM")]
    pub from: Option<String>,

    /// Last day (YYYY-MM-DD or YYYY-MM). Defaults to today
    #[arg(value_name = "TO")]
    pub to: Option<String>,
}

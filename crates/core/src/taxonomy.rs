// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Status taxonomy and normalization of free-form status strings.
//!
//! Upstream status values are arbitrary strings. They are collapsed into a
//! fixed, ordered set of canonical categories at the normalization boundary;
//! anything unrecognized lands in a single overflow category. Raw strings are
//! not carried past [`Taxonomy::normalize`].

use std::collections::HashSet;

use crate::error::{Error, Result};

/// Canonical labels of the reference deployment, in display order.
pub const DEFAULT_CATEGORIES: [&str; 9] = [
    "Pending Triage",
    "Icebox",
    "Blocked",
    "Needs More Info",
    "Accepted",
    "Prioritized",
    "In Progress",
    "In Review",
    "Closed",
];

pub const DEFAULT_OVERFLOW: &str = "Other";
pub const DEFAULT_INITIAL: &str = "Pending Triage";
pub const DEFAULT_TERMINAL: &str = "Closed";

/// A normalized status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Position of a canonical label within the taxonomy.
    Canonical(usize),
    /// Any status outside the taxonomy. The raw value is not retained.
    Overflow,
}

/// Ordered category labels plus the overflow, initial and terminal designations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Taxonomy {
    categories: Vec<String>,
    overflow: String,
    initial: usize,
    terminal: usize,
    display_overflow: bool,
    fallback_to_current_status: bool,
}

impl Default for Taxonomy {
    fn default() -> Self {
        Taxonomy {
            categories: DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect(),
            overflow: DEFAULT_OVERFLOW.to_string(),
            initial: 0,
            terminal: DEFAULT_CATEGORIES.len() - 1,
            display_overflow: true,
            fallback_to_current_status: false,
        }
    }
}

impl Taxonomy {
    /// Builds a taxonomy, validating that labels are non-empty and unique,
    /// that the overflow label is not canonical, and that the initial and
    /// terminal labels are canonical.
    pub fn new(
        categories: Vec<String>,
        overflow: String,
        initial: &str,
        terminal: &str,
    ) -> Result<Self> {
        if categories.is_empty() {
            return Err(Error::InvalidTaxonomy("no categories defined".to_string()));
        }
        let mut seen = HashSet::new();
        for label in &categories {
            if label.trim().is_empty() {
                return Err(Error::InvalidTaxonomy("empty category label".to_string()));
            }
            if !seen.insert(label.as_str()) {
                return Err(Error::InvalidTaxonomy(format!(
                    "duplicate category '{label}'"
                )));
            }
        }
        if overflow.trim().is_empty() {
            return Err(Error::InvalidTaxonomy("empty overflow label".to_string()));
        }
        if seen.contains(overflow.as_str()) {
            return Err(Error::InvalidTaxonomy(format!(
                "overflow label '{overflow}' is also a category"
            )));
        }
        let position = |label: &str, role: &str| {
            categories.iter().position(|c| c == label).ok_or_else(|| {
                Error::InvalidTaxonomy(format!("{role} status '{label}' is not a category"))
            })
        };
        let initial = position(initial, "initial")?;
        let terminal = position(terminal, "terminal")?;

        Ok(Taxonomy {
            categories,
            overflow,
            initial,
            terminal,
            display_overflow: true,
            fallback_to_current_status: false,
        })
    }

    /// Whether the overflow category is emitted as its own series.
    pub fn with_display_overflow(mut self, display: bool) -> Self {
        self.display_overflow = display;
        self
    }

    /// Whether an issue with no tracked events starts from its cached
    /// current status instead of the initial status.
    pub fn with_fallback_to_current_status(mut self, fallback: bool) -> Self {
        self.fallback_to_current_status = fallback;
        self
    }

    /// Map a raw status string to its category. Exact, case-sensitive match.
    pub fn normalize(&self, raw: &str) -> Category {
        match self.categories.iter().position(|c| c == raw) {
            Some(index) => Category::Canonical(index),
            None => Category::Overflow,
        }
    }

    pub fn label(&self, category: Category) -> &str {
        match category {
            Category::Canonical(index) => self
                .categories
                .get(index)
                .map_or(self.overflow.as_str(), String::as_str),
            Category::Overflow => &self.overflow,
        }
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn overflow_label(&self) -> &str {
        &self.overflow
    }

    pub fn initial(&self) -> Category {
        Category::Canonical(self.initial)
    }

    pub fn terminal(&self) -> Category {
        Category::Canonical(self.terminal)
    }

    pub fn is_terminal(&self, category: Category) -> bool {
        category == self.terminal()
    }

    /// True when a raw transition target is exactly the terminal label.
    pub fn is_terminal_raw(&self, raw: &str) -> bool {
        self.categories
            .get(self.terminal)
            .is_some_and(|label| label == raw)
    }

    pub fn display_overflow(&self) -> bool {
        self.display_overflow
    }

    pub fn fallback_to_current_status(&self) -> bool {
        self.fallback_to_current_status
    }

    /// Number of counter slots a bucket needs: every canonical label plus overflow.
    pub fn slot_count(&self) -> usize {
        self.categories.len() + 1
    }

    /// Counter slot for a category. Overflow takes the last slot.
    pub fn slot(&self, category: Category) -> usize {
        match category {
            Category::Canonical(index) if index < self.categories.len() => index,
            _ => self.categories.len(),
        }
    }

    /// Categories emitted as series, in display order: the canonical labels
    /// followed by overflow when it is displayed.
    pub fn displayed(&self) -> Vec<Category> {
        let mut out: Vec<Category> = (0..self.categories.len()).map(Category::Canonical).collect();
        if self.display_overflow {
            out.push(Category::Overflow);
        }
        out
    }
}

#[cfg(test)]
#[path = "taxonomy_tests.rs"]
mod tests;

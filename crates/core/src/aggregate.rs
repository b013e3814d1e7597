// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-day status histogram built from replaying every issue.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::day::DateRange;
use crate::error::{Error, Result};
use crate::issue::Issue;
use crate::replay::replay;
use crate::store::EventStore;
use crate::taxonomy::{Category, Taxonomy};

/// Counts for a single calendar day.
///
/// `counts` holds one slot per taxonomy category (see [`Taxonomy::slot`]),
/// so every category is present for every day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyBucket {
    day: NaiveDate,
    total: u64,
    counts: Vec<u64>,
}

impl DailyBucket {
    fn new(day: NaiveDate, slots: usize) -> Self {
        DailyBucket {
            day,
            total: 0,
            counts: vec![0; slots],
        }
    }

    pub fn day(&self) -> NaiveDate {
        self.day
    }

    /// Issues counted on this day, whatever their status.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn count(&self, taxonomy: &Taxonomy, category: Category) -> u64 {
        self.counts
            .get(taxonomy.slot(category))
            .copied()
            .unwrap_or(0)
    }

    /// Sum over every category slot. Equals [`total`](Self::total).
    pub fn category_sum(&self) -> u64 {
        self.counts.iter().sum()
    }

    fn record(&mut self, slot: usize) {
        self.total += 1;
        if let Some(count) = self.counts.get_mut(slot) {
            *count += 1;
        }
    }
}

/// Day-indexed buckets covering one day either side of a window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    window: DateRange,
    slots: usize,
    buckets: BTreeMap<NaiveDate, DailyBucket>,
}

impl Histogram {
    /// Zero-filled buckets for every day of `window.padded()`.
    pub fn new(window: DateRange, taxonomy: &Taxonomy) -> Self {
        let slots = taxonomy.slot_count();
        let buckets = window
            .padded()
            .days()
            .map(|day| (day, DailyBucket::new(day, slots)))
            .collect();
        Histogram {
            window,
            slots,
            buckets,
        }
    }

    /// The requested output window (without padding).
    pub fn window(&self) -> DateRange {
        self.window
    }

    pub fn bucket(&self, day: NaiveDate) -> Option<&DailyBucket> {
        self.buckets.get(&day)
    }

    /// All buckets in ascending day order, padding days included.
    pub fn buckets(&self) -> impl Iterator<Item = &DailyBucket> {
        self.buckets.values()
    }

    fn record(&mut self, taxonomy: &Taxonomy, day: NaiveDate, category: Category) {
        let slots = self.slots;
        self.buckets
            .entry(day)
            .or_insert_with(|| DailyBucket::new(day, slots))
            .record(taxonomy.slot(category));
    }
}

/// Replay every issue over `window` and fold the results into a histogram.
///
/// Issues created after the window are skipped without touching the store.
/// Any store failure aborts the whole run; no partial histogram is returned.
pub fn aggregate<S: EventStore + ?Sized>(
    store: &S,
    issues: &[Issue],
    taxonomy: &Taxonomy,
    window: DateRange,
    field: &str,
) -> Result<Histogram> {
    let mut histogram = Histogram::new(window, taxonomy);
    let mut replayed = 0usize;

    for issue in issues {
        if issue.created_day() > window.end() {
            tracing::debug!(key = %issue.key, "created after window, skipped");
            continue;
        }

        let events = store
            .events(&issue.key, field)
            .map_err(|source| Error::EventLookup {
                key: issue.key.clone(),
                field: field.to_string(),
                start: window.start(),
                end: window.end(),
                source: Box::new(source),
            })?;

        let mut days = 0usize;
        for (day, category) in replay(issue, &events, taxonomy, window) {
            histogram.record(taxonomy, day, category);
            days += 1;
        }
        replayed += 1;
        tracing::debug!(key = %issue.key, events = events.len(), days, "replayed issue");
    }

    tracing::info!(
        issues = issues.len(),
        replayed,
        from = %window.start(),
        to = %window.end(),
        "aggregated daily status counts"
    );
    Ok(histogram)
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;

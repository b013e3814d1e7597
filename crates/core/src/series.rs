// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Flattening a histogram into per-category count arrays.

use serde::Serialize;

use crate::aggregate::{aggregate, Histogram};
use crate::day::{day_key, DateRange};
use crate::error::Result;
use crate::store::EventStore;
use crate::taxonomy::Taxonomy;

/// Counts for one category, aligned with [`StatusSeries::days`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySeries {
    pub status: String,
    pub counts: Vec<u64>,
}

/// Day axis plus one series per displayed category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusSeries {
    pub from: String,
    pub to: String,
    pub days: Vec<String>,
    pub series: Vec<CategorySeries>,
    /// Issues counted per day, overflow included even when it is hidden.
    pub totals: Vec<u64>,
}

impl StatusSeries {
    /// Category labels in output order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(|s| s.status.as_str())
    }

    /// Counts for one day across every series, in output order.
    pub fn row(&self, index: usize) -> Vec<u64> {
        self.series
            .iter()
            .map(|s| s.counts.get(index).copied().unwrap_or(0))
            .collect()
    }
}

/// Restrict `histogram` to its window and emit one array per displayed
/// category. Padding days are dropped here.
pub fn emit(histogram: &Histogram, taxonomy: &Taxonomy) -> StatusSeries {
    let window = histogram.window();
    let buckets: Vec<_> = window
        .days()
        .map(|day| (day, histogram.bucket(day)))
        .collect();

    let series = taxonomy
        .displayed()
        .into_iter()
        .map(|category| CategorySeries {
            status: taxonomy.label(category).to_string(),
            counts: buckets
                .iter()
                .map(|(_, bucket)| bucket.map_or(0, |b| b.count(taxonomy, category)))
                .collect(),
        })
        .collect();

    StatusSeries {
        from: day_key(window.start()),
        to: day_key(window.end()),
        days: buckets.iter().map(|(day, _)| day_key(*day)).collect(),
        series,
        totals: buckets
            .iter()
            .map(|(_, bucket)| bucket.map_or(0, |b| b.total()))
            .collect(),
    }
}

/// List every issue in `store`, aggregate over `window`, and emit.
pub fn compute_daily_status_series<S: EventStore + ?Sized>(
    store: &S,
    taxonomy: &Taxonomy,
    window: DateRange,
    field: &str,
) -> Result<StatusSeries> {
    let issues = store.issues()?;
    let histogram = aggregate(store, &issues, taxonomy, window, field)?;
    Ok(emit(&histogram, taxonomy))
}

#[cfg(test)]
#[path = "series_tests.rs"]
mod tests;

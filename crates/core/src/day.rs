// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Calendar-day helpers and the inclusive reporting window.
//!
//! Every day boundary is a UTC midnight. Day keys exchanged between
//! components use the `YYYY-MM-DD` representation.

use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

use crate::error::{Error, Result};

/// Format used for day keys.
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Render a day as its `YYYY-MM-DD` key.
pub fn day_key(day: NaiveDate) -> String {
    day.format(DAY_FORMAT).to_string()
}

/// The calendar day (UTC) an instant falls on.
pub fn day_of(ts: DateTime<Utc>) -> NaiveDate {
    ts.date_naive()
}

/// The UTC midnight that ends `day`, or `None` at the end of the calendar.
pub fn end_of_day(day: NaiveDate) -> Option<DateTime<Utc>> {
    day.succ_opt().map(|d| d.and_time(NaiveTime::MIN).and_utc())
}

/// Parse a user-supplied day.
///
/// Accepts `YYYY-MM-DD`, or `YYYY-MM` which resolves to the first day of
/// that month.
pub fn parse_day(value: &str) -> Result<NaiveDate> {
    let trimmed = value.trim();
    let parsed = match trimmed.len() {
        10 => NaiveDate::parse_from_str(trimmed, DAY_FORMAT).ok(),
        7 => NaiveDate::parse_from_str(&format!("{trimmed}-01"), DAY_FORMAT).ok(),
        _ => None,
    };
    parsed.ok_or_else(|| Error::InvalidDate {
        value: value.to_string(),
    })
}

/// An inclusive `[start, end]` range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a range, rejecting a start that falls after the end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidDateRange { start, end });
        }
        Ok(DateRange { start, end })
    }

    /// Parses both ends with [`parse_day`] and validates the ordering.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        DateRange::new(parse_day(start)?, parse_day(end)?)
    }

    /// The default reporting window: from the first day of the month one
    /// year before `today`, through `today`.
    pub fn trailing_year(today: NaiveDate) -> Self {
        let year_ago = today.checked_sub_months(Months::new(12)).unwrap_or(today);
        let start = year_ago.with_day(1).unwrap_or(year_ago);
        DateRange { start, end: today }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// Number of days in the range, both ends included.
    pub fn len_days(&self) -> usize {
        usize::try_from((self.end - self.start).num_days() + 1).unwrap_or(0)
    }

    /// Iterates every day of the range in ascending order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }

    /// The range widened by one day on each side (`[start-1, end+1]`),
    /// clamped at the limits of the calendar.
    pub fn padded(&self) -> DateRange {
        DateRange {
            start: self.start.pred_opt().unwrap_or(self.start),
            end: self.end.succ_opt().unwrap_or(self.end),
        }
    }
}

#[cfg(test)]
#[path = "day_tests.rs"]
mod tests;

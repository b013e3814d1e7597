// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Day-by-day reconstruction of one issue's status from its changelog.
//!
//! Only transitions are logged, so the status on a given day is whatever the
//! latest transition up to the end of that day set it to. Replay always
//! starts at the issue's creation day, even when that is long before the
//! window, so the status is correct by the time the window opens. Days
//! before the window are walked but not yielded.

use std::iter::FusedIterator;

use chrono::NaiveDate;

use crate::day::{end_of_day, DateRange};
use crate::issue::{Issue, TransitionEvent};
use crate::taxonomy::{Category, Taxonomy};

/// Lazy `(day, status)` sequence for one issue.
///
/// Ends after the window's last day, or after the first day the issue is in
/// the terminal status, whichever comes first.
#[derive(Debug, Clone)]
pub struct Replay<'a> {
    taxonomy: &'a Taxonomy,
    events: &'a [TransitionEvent],
    next_event: usize,
    cursor: NaiveDate,
    status: Category,
    window: DateRange,
    finished: bool,
}

/// Start replaying `issue` over `window`.
///
/// `events` must hold only the tracked field, oldest first. An issue created
/// after the window yields nothing.
pub fn replay<'a>(
    issue: &Issue,
    events: &'a [TransitionEvent],
    taxonomy: &'a Taxonomy,
    window: DateRange,
) -> Replay<'a> {
    let status = if events.is_empty() && taxonomy.fallback_to_current_status() {
        taxonomy.normalize(&issue.status)
    } else {
        taxonomy.initial()
    };
    let cursor = issue.created_day();

    Replay {
        taxonomy,
        events,
        next_event: 0,
        cursor,
        status,
        window,
        finished: cursor > window.end(),
    }
}

impl Replay<'_> {
    /// Apply every event recorded before the end of `day`.
    ///
    /// A raw transition to the terminal label stops consumption for the day
    /// even if later same-day events exist.
    fn apply_events_through(&mut self, day: NaiveDate) {
        let boundary = end_of_day(day);
        while let Some(event) = self.events.get(self.next_event) {
            if boundary.is_some_and(|b| event.timestamp >= b) {
                break;
            }
            self.next_event += 1;
            self.status = self.taxonomy.normalize(&event.to_value);
            if self.taxonomy.is_terminal_raw(&event.to_value) {
                break;
            }
        }
    }
}

impl Iterator for Replay<'_> {
    type Item = (NaiveDate, Category);

    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished {
            let day = self.cursor;
            self.apply_events_through(day);

            if day >= self.window.end() || self.taxonomy.is_terminal(self.status) {
                self.finished = true;
            } else {
                match day.succ_opt() {
                    Some(next) => self.cursor = next,
                    None => self.finished = true,
                }
            }

            if self.window.contains(day) {
                return Some((day, self.status));
            }
        }
        None
    }
}

impl FusedIterator for Replay<'_> {}

#[cfg(test)]
#[path = "replay_tests.rs"]
mod tests;

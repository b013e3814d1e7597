// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Read access to cached issues and their changelog.

use crate::db::Database;
use crate::error::Result;
use crate::issue::{Issue, TransitionEvent};

/// The store interface the reconstruction engine reads from.
pub trait EventStore {
    /// Every cached issue. No filtering is applied.
    fn issues(&self) -> Result<Vec<Issue>>;

    /// Changes to `field` on `key`, sorted by timestamp ascending with ties
    /// in recording order.
    fn events(&self, key: &str, field: &str) -> Result<Vec<TransitionEvent>>;
}

impl EventStore for Database {
    fn issues(&self) -> Result<Vec<Issue>> {
        self.list_issues()
    }

    fn events(&self, key: &str, field: &str) -> Result<Vec<TransitionEvent>> {
        self.list_events(key, field)
    }
}

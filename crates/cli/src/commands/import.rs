// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, BufRead, BufReader};

use strata_core::{read_records, Database, Issue};

use crate::display::format_import_line;
use crate::error::{Error, Result};

use super::open_db;

/// What an import stored.
#[derive(Debug, Default)]
pub struct ImportSummary {
    /// Each imported issue with its number of changelog events.
    pub issues: Vec<(Issue, usize)>,
}

impl ImportSummary {
    pub fn event_count(&self) -> usize {
        self.issues.iter().map(|(_, n)| n).sum()
    }
}

pub fn run(file: Option<String>, cache: Option<&str>) -> Result<()> {
    let path = file.unwrap_or_else(|| "-".to_string());
    let (db, _) = open_db(cache)?;

    let reader: Box<dyn BufRead> = if path == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        let file = std::fs::File::open(&path)
            .map_err(|e| Error::Io(io::Error::other(format!("cannot open {}: {}", path, e))))?;
        Box::new(BufReader::new(file))
    };

    let summary = crate::time_phase!("import::apply", { run_impl(&db, reader)? });
    for (issue, events) in &summary.issues {
        println!("{}", format_import_line(issue, *events));
    }
    println!(
        "Imported {} issues ({} events)",
        summary.issues.len(),
        summary.event_count()
    );
    Ok(())
}

/// Internal implementation that accepts db for testing.
///
/// The whole input is parsed before anything is written, and all writes
/// happen in one transaction: a bad line leaves the cache untouched.
pub(crate) fn run_impl<R: BufRead>(db: &Database, reader: R) -> Result<ImportSummary> {
    let records = read_records(reader)?;

    let issues = db.in_transaction(|db| {
        let mut stored = Vec::with_capacity(records.len());
        for record in records {
            db.upsert_issue(&record.issue)?;
            let replaced = db.delete_events(&record.issue.key)?;
            for event in &record.events {
                db.insert_event(event)?;
            }
            let events = db.count_events(&record.issue.key)?;
            tracing::debug!(
                key = %record.issue.key,
                events,
                replaced,
                "imported issue"
            );
            stored.push((record.issue, events));
        }
        Ok(stored)
    })?;

    tracing::info!(issues = issues.len(), "import complete");
    Ok(ImportSummary { issues })
}

#[cfg(test)]
#[path = "import_tests.rs"]
mod tests;

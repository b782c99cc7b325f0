//! In-memory record store and the session that owns it.
//!
//! A [`RecordStore`] is built from the full text of one export in a single
//! pass. A [`Session`] holds the current store and replaces it wholesale when
//! another export is loaded; nothing is merged between loads.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::filter::{FilterCriteria, filter};
use crate::punch::{Rejection, parse_line};
use crate::record::{AttendanceRecord, aggregate};

/// What happened while loading an export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Lines seen, including skipped ones.
    pub lines: usize,
    /// Lines that produced a punch.
    pub punches: usize,
    /// Attendance records produced.
    pub records: usize,
    /// Skipped lines per reason.
    pub skipped: BTreeMap<&'static str, usize>,
}

impl LoadReport {
    /// Total number of lines that did not produce a punch.
    pub fn skipped_total(&self) -> usize {
        self.skipped.values().sum()
    }

    /// Skipped lines for one reason.
    pub fn skipped_for(&self, reason: Rejection) -> usize {
        self.skipped.get(reason.as_str()).copied().unwrap_or(0)
    }

    fn skip(&mut self, reason: Rejection) {
        *self.skipped.entry(reason.as_str()).or_insert(0) += 1;
    }
}

/// All records of one loaded export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<AttendanceRecord>,
    report: LoadReport,
}

impl RecordStore {
    /// Parses and aggregates the full text of an export.
    pub fn from_text(text: &str) -> Self {
        let mut report = LoadReport::default();
        let mut punches = Vec::new();

        for (number, line) in text.lines().enumerate() {
            report.lines += 1;
            match parse_line(line) {
                Ok(punch) => punches.push(punch),
                Err(reason) => {
                    if !matches!(reason, Rejection::Blank | Rejection::Comment) {
                        tracing::debug!(line = number + 1, %reason, "skipping line");
                    }
                    report.skip(reason);
                }
            }
        }

        report.punches = punches.len();
        let records = aggregate(punches);
        report.records = records.len();

        tracing::info!(
            lines = report.lines,
            punches = report.punches,
            records = report.records,
            skipped = report.skipped_total(),
            "loaded export"
        );

        Self { records, report }
    }

    pub fn records(&self) -> &[AttendanceRecord] {
        &self.records
    }

    pub const fn report(&self) -> &LoadReport {
        &self.report
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records matching `criteria`, in store order.
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<&AttendanceRecord> {
        filter(&self.records, criteria)
    }

    /// Number of distinct employees.
    pub fn employee_count(&self) -> usize {
        self.records
            .iter()
            .map(AttendanceRecord::employee_id)
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// Earliest and latest record dates.
    pub fn date_span(&self) -> Option<(&str, &str)> {
        let first = self.records.iter().map(AttendanceRecord::date).min()?;
        let last = self.records.iter().map(AttendanceRecord::date).max()?;
        Some((first, last))
    }
}

/// Owns the store for the currently loaded export.
#[derive(Debug, Default)]
pub struct Session {
    store: RecordStore,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a new export, discarding the previous one.
    ///
    /// The new store is fully built before it replaces the old one.
    pub fn load(&mut self, text: &str) -> &LoadReport {
        let store = RecordStore::from_text(text);
        self.store = store;
        self.store.report()
    }

    pub const fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn records(&self) -> &[AttendanceRecord] {
        self.store.records()
    }

    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<&AttendanceRecord> {
        self.store.filter(criteria)
    }
}

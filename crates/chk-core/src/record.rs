//! Daily attendance records and the aggregation of punches into them.

use std::collections::HashMap;

use serde::Serialize;

use crate::duration::{WorkedDuration, compute_worked, worked_label};
use crate::punch::Punch;

/// Grouping key: one record per employee per date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordKey {
    pub employee_id: String,
    pub date: String,
}

impl From<&Punch> for RecordKey {
    fn from(punch: &Punch) -> Self {
        Self {
            employee_id: punch.employee_id.clone(),
            date: punch.date.clone(),
        }
    }
}

/// The attendance window of one employee on one date.
///
/// Built only by [`aggregate`]; all fields are read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceRecord {
    employee_id: String,
    name: String,
    date: String,
    punch_times: Vec<String>,
    entry: Option<String>,
    exit: Option<String>,
    #[serde(rename = "worked_minutes")]
    worked: Option<WorkedDuration>,
}

impl AttendanceRecord {
    pub fn employee_id(&self) -> &str {
        &self.employee_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The record date as read from the export (`YYYY-MM-DD`).
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Every punch of the day in ascending order, duplicates included.
    pub fn punch_times(&self) -> &[String] {
        &self.punch_times
    }

    pub fn entry(&self) -> Option<&str> {
        self.entry.as_deref()
    }

    pub fn exit(&self) -> Option<&str> {
        self.exit.as_deref()
    }

    pub const fn worked(&self) -> Option<WorkedDuration> {
        self.worked
    }

    /// `"{h}h {m}m"`, or the no-record label.
    pub fn worked_label(&self) -> String {
        worked_label(self.worked)
    }

    pub fn key(&self) -> RecordKey {
        RecordKey {
            employee_id: self.employee_id.clone(),
            date: self.date.clone(),
        }
    }
}

/// A record still collecting punches.
#[derive(Debug)]
struct PendingRecord {
    employee_id: String,
    name: String,
    date: String,
    punch_times: Vec<String>,
}

impl PendingRecord {
    fn finalize(mut self) -> AttendanceRecord {
        self.punch_times.sort();

        let (entry, exit) = match self.punch_times.as_slice() {
            [] => (None, None),
            [only] => (Some(only.clone()), None),
            [first, .., last] => (Some(first.clone()), Some(last.clone())),
        };
        let worked = compute_worked(entry.as_deref(), exit.as_deref());

        AttendanceRecord {
            employee_id: self.employee_id,
            name: self.name,
            date: self.date,
            punch_times: self.punch_times,
            entry,
            exit,
            worked,
        }
    }
}

/// Groups punches per employee and date, then derives entry, exit and
/// worked time for each group.
///
/// Records come out in the order their key was first seen.
pub fn aggregate<I>(punches: I) -> Vec<AttendanceRecord>
where
    I: IntoIterator<Item = Punch>,
{
    let mut index: HashMap<RecordKey, usize> = HashMap::new();
    let mut pending: Vec<PendingRecord> = Vec::new();

    for punch in punches {
        let key = RecordKey::from(&punch);
        let slot = *index.entry(key).or_insert_with(|| {
            pending.push(PendingRecord {
                employee_id: punch.employee_id.clone(),
                name: punch.name.clone(),
                date: punch.date.clone(),
                punch_times: Vec::new(),
            });
            pending.len() - 1
        });
        pending[slot].punch_times.push(punch.time);
    }

    pending.into_iter().map(PendingRecord::finalize).collect()
}

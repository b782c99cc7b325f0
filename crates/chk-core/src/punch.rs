//! Line parser for tab-separated time-clock exports.
//!
//! Each data line of an export describes one punch. Only three columns are
//! used: index 2 (employee number), index 3 (name) and index 9, which holds
//! the date and time separated by two spaces (`2024-01-15  08:02:11`).

use std::fmt;

use serde::Serialize;

/// Minimum number of tab-separated fields in a data line.
pub const MIN_FIELDS: usize = 10;

const EMPLOYEE_FIELD: usize = 2;
const NAME_FIELD: usize = 3;
const TIMESTAMP_FIELD: usize = 9;

/// Separator between the date and the time inside the timestamp column.
const TIMESTAMP_SEPARATOR: &str = "  ";

/// Header rows begin with this token.
const HEADER_PREFIX: &str = "No\t";

/// A single clock-in/out event read from one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Punch {
    pub employee_id: String,
    pub name: String,
    /// Expected as `YYYY-MM-DD`, not validated.
    pub date: String,
    /// Expected as `HH:MM[:SS]`, not validated.
    pub time: String,
}

/// Why a line did not produce a punch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    /// Empty or whitespace-only line.
    Blank,
    /// Line starting with `#`.
    Comment,
    /// Column header row.
    Header,
    /// Fewer than [`MIN_FIELDS`] columns.
    TooFewFields,
    /// The timestamp column did not contain a date and a time.
    MissingTimestamp,
}

impl Rejection {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Blank => "blank",
            Self::Comment => "comment",
            Self::Header => "header",
            Self::TooFewFields => "too_few_fields",
            Self::MissingTimestamp => "missing_timestamp",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parses one raw line into a [`Punch`].
///
/// Only the shape of the line is checked. Dates and times are passed through
/// as-is and dealt with when durations are computed.
pub fn parse_line(raw: &str) -> Result<Punch, Rejection> {
    if raw.trim().is_empty() {
        return Err(Rejection::Blank);
    }
    if raw.starts_with('#') {
        return Err(Rejection::Comment);
    }
    if raw.starts_with(HEADER_PREFIX) {
        return Err(Rejection::Header);
    }

    let fields: Vec<&str> = raw.split('\t').collect();
    if fields.len() < MIN_FIELDS {
        return Err(Rejection::TooFewFields);
    }

    let mut timestamp = fields[TIMESTAMP_FIELD].trim().split(TIMESTAMP_SEPARATOR);
    let (Some(date), Some(time)) = (timestamp.next(), timestamp.next()) else {
        return Err(Rejection::MissingTimestamp);
    };

    Ok(Punch {
        employee_id: fields[EMPLOYEE_FIELD].trim().to_string(),
        name: fields[NAME_FIELD].trim().to_string(),
        date: date.to_string(),
        time: time.to_string(),
    })
}

//! Worked-time computation between an entry and an exit punch.

use std::fmt;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Serialize, Serializer};

/// Label shown when a record has no usable worked time.
pub const NO_RECORD: &str = "Sin registro";

const TIME_FORMATS: [&str; 2] = ["%H:%M:%S%.f", "%H:%M"];

/// A positive worked span, in whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WorkedDuration(u32);

impl WorkedDuration {
    /// Returns `None` unless `minutes` is positive.
    #[must_use]
    pub const fn from_minutes(minutes: u32) -> Option<Self> {
        if minutes == 0 { None } else { Some(Self(minutes)) }
    }

    #[must_use]
    pub const fn minutes(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn hours_part(self) -> u32 {
        self.0 / 60
    }

    #[must_use]
    pub const fn minutes_part(self) -> u32 {
        self.0 % 60
    }
}

impl fmt::Display for WorkedDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m", self.hours_part(), self.minutes_part())
    }
}

impl Serialize for WorkedDuration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

/// Parses a time of day, accepting `HH:MM`, `HH:MM:SS` and fractional seconds.
pub fn parse_time_of_day(s: &str) -> Option<NaiveTime> {
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(s, format).ok())
}

/// Computes the time worked between `entry` and `exit`.
///
/// An exit earlier than the entry is read as a shift that crossed midnight.
/// Returns `None` when either side is missing or unparseable, or when the
/// span is shorter than one minute.
pub fn compute_worked(entry: Option<&str>, exit: Option<&str>) -> Option<WorkedDuration> {
    let entry = parse_time_of_day(entry?)?;
    let exit = parse_time_of_day(exit?)?;

    let reference = NaiveDate::default();
    let start = NaiveDateTime::new(reference, entry);
    let mut end = NaiveDateTime::new(reference, exit);
    if end < start {
        end += Duration::days(1);
    }

    let minutes = (end - start).num_minutes();
    u32::try_from(minutes).ok().and_then(WorkedDuration::from_minutes)
}

/// Formats an optional worked time, using [`NO_RECORD`] when absent.
pub fn worked_label(worked: Option<WorkedDuration>) -> String {
    worked.map_or_else(|| NO_RECORD.to_string(), |d| d.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(entry: Option<&str>, exit: Option<&str>) -> String {
        worked_label(compute_worked(entry, exit))
    }

    #[test]
    fn same_day_shift() {
        assert_eq!(label(Some("08:00"), Some("17:30")), "9h 30m");
        assert_eq!(label(Some("08:02:11"), Some("16:59:58")), "8h 57m");
    }

    #[test]
    fn shift_crossing_midnight() {
        assert_eq!(label(Some("22:00"), Some("06:00")), "8h 0m");
        assert_eq!(label(Some("23:45:00"), Some("00:15:00")), "0h 30m");
    }

    #[test]
    fn identical_times_have_no_record() {
        assert_eq!(label(Some("08:00"), Some("08:00")), NO_RECORD);
        assert_eq!(label(Some("08:00:00"), Some("08:00:40")), NO_RECORD);
    }

    #[test]
    fn missing_side_has_no_record() {
        assert_eq!(label(None, Some("17:00")), NO_RECORD);
        assert_eq!(label(Some("08:00"), None), NO_RECORD);
        assert_eq!(label(None, None), NO_RECORD);
    }

    #[test]
    fn unparseable_times_have_no_record() {
        assert_eq!(label(Some("8h"), Some("17:00")), NO_RECORD);
        assert_eq!(label(Some("08:00"), Some("25:00")), NO_RECORD);
        assert_eq!(label(Some(""), Some("")), NO_RECORD);
    }

    #[test]
    fn mixed_precision_inputs() {
        assert_eq!(label(Some("09:00"), Some("10:15:30")), "1h 15m");
        assert_eq!(label(Some("09:00:00.500"), Some("10:00")), "0h 59m");
    }

    #[test]
    fn from_minutes_rejects_zero() {
        assert_eq!(WorkedDuration::from_minutes(0), None);
        assert_eq!(WorkedDuration::from_minutes(61).unwrap().to_string(), "1h 1m");
    }
}

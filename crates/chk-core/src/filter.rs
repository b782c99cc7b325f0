//! Free-text and date-range filtering over attendance records.

use chrono::NaiveDate;

use crate::record::AttendanceRecord;

/// Format used for record dates, which sorts the same as the calendar.
const ISO_DATE: &str = "%Y-%m-%d";

/// A query over loaded records. The default matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Matched case-insensitively against name and employee id.
    pub text: String,
    /// Inclusive lower bound.
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper bound.
    pub date_to: Option<NaiveDate>,
}

impl FilterCriteria {
    /// True when `date_from` is after `date_to`, which matches nothing.
    pub fn is_inverted(&self) -> bool {
        matches!((self.date_from, self.date_to), (Some(from), Some(to)) if from > to)
    }
}

/// A compiled form of [`FilterCriteria`], built once per query.
struct Matcher {
    needle: String,
    from: Option<String>,
    to: Option<String>,
}

impl Matcher {
    fn new(criteria: &FilterCriteria) -> Self {
        Self {
            needle: criteria.text.to_lowercase(),
            from: criteria.date_from.map(|d| d.format(ISO_DATE).to_string()),
            to: criteria.date_to.map(|d| d.format(ISO_DATE).to_string()),
        }
    }

    fn matches_text(&self, record: &AttendanceRecord) -> bool {
        record.name().to_lowercase().contains(&self.needle)
            || record.employee_id().to_lowercase().contains(&self.needle)
    }

    fn matches_date(&self, record: &AttendanceRecord) -> bool {
        let date = record.date();
        self.from.as_deref().is_none_or(|from| date >= from)
            && self.to.as_deref().is_none_or(|to| date <= to)
    }

    fn matches(&self, record: &AttendanceRecord) -> bool {
        self.matches_text(record) && self.matches_date(record)
    }
}

/// Returns the records satisfying both the text and the date predicate,
/// in their original order.
pub fn filter<'a, I>(records: I, criteria: &FilterCriteria) -> Vec<&'a AttendanceRecord>
where
    I: IntoIterator<Item = &'a AttendanceRecord>,
{
    let matcher = Matcher::new(criteria);
    records
        .into_iter()
        .filter(|record| matcher.matches(record))
        .collect()
}

//! Calendar date input validation.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors from parsing user-supplied dates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateError {
    /// The value was empty.
    #[error("date cannot be empty")]
    Empty,

    /// The value is not a valid `YYYY-MM-DD` date.
    #[error("invalid date '{value}', expected YYYY-MM-DD")]
    Invalid {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Parses a `YYYY-MM-DD` date such as a filter bound.
pub fn parse_iso_date(s: &str) -> Result<NaiveDate, DateError> {
    let value = s.trim();
    if value.is_empty() {
        return Err(DateError::Empty);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|source| DateError::Invalid {
        value: value.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        assert_eq!(
            parse_iso_date("2024-01-10").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
        );
        assert_eq!(
            parse_iso_date(" 2024-02-29 ").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(parse_iso_date("  "), Err(DateError::Empty));
    }

    #[test]
    fn rejects_other_formats() {
        let err = parse_iso_date("10/01/2024").unwrap_err();
        assert_eq!(err.to_string(), "invalid date '10/01/2024', expected YYYY-MM-DD");
        assert!(parse_iso_date("2023-02-29").is_err());
    }
}

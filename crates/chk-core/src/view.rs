//! Display shaping shared by every renderer.
//!
//! Records are shown sorted by date, with a separator before each new date.
//! [`DayView`] does that sorting and grouping once so the table, CSV and PDF
//! renderers all agree on row order.

use crate::record::AttendanceRecord;

/// Placeholder for a missing entry punch.
pub const NO_ENTRY: &str = "Sin registro de entrada";

/// Placeholder for a missing exit punch.
pub const NO_EXIT: &str = "Sin registro de salida";

/// Records of one date, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayGroup<'a> {
    pub date: &'a str,
    pub records: Vec<&'a AttendanceRecord>,
}

/// A date-sorted view over a set of records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayView<'a> {
    groups: Vec<DayGroup<'a>>,
}

impl<'a> DayView<'a> {
    /// Sorts by date (stable, so same-date records keep their order) and
    /// groups consecutive records sharing a date.
    pub fn new<I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a AttendanceRecord>,
    {
        let mut sorted: Vec<&AttendanceRecord> = records.into_iter().collect();
        sorted.sort_by(|a, b| a.date().cmp(b.date()));

        let mut groups: Vec<DayGroup<'a>> = Vec::new();
        for record in sorted {
            match groups.last_mut() {
                Some(group) if group.date == record.date() => group.records.push(record),
                _ => groups.push(DayGroup {
                    date: record.date(),
                    records: vec![record],
                }),
            }
        }

        Self { groups }
    }

    pub fn groups(&self) -> &[DayGroup<'a>] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of records across all dates.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.records.len()).sum()
    }

    /// Records in display order, without date boundaries.
    pub fn records(&self) -> impl Iterator<Item = &'a AttendanceRecord> + '_ {
        self.groups.iter().flat_map(|g| g.records.iter().copied())
    }
}

/// Converts `YYYY-MM-DD` to `DD/MM/YYYY`.
///
/// Anything that is not three `-`-separated parts is returned unchanged.
pub fn format_date(date: &str) -> String {
    let mut parts = date.split('-');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(y), Some(m), Some(d), None) => format!("{d}/{m}/{y}"),
        _ => date.to_string(),
    }
}

/// The six display cells of a record.
///
/// Missing entry/exit punches use `NO_ENTRY`/`NO_EXIT`.
pub fn display_cells(record: &AttendanceRecord) -> [String; 6] {
    [
        record.employee_id().to_string(),
        record.name().to_string(),
        format_date(record.date()),
        record.entry().unwrap_or(NO_ENTRY).to_string(),
        record.exit().unwrap_or(NO_EXIT).to_string(),
        record.worked_label(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::punch::Punch;
    use crate::record::aggregate;

    fn records(rows: &[(&str, &str, &str)]) -> Vec<AttendanceRecord> {
        aggregate(rows.iter().map(|(id, date, time)| Punch {
            employee_id: (*id).into(),
            name: format!("Empleado {id}"),
            date: (*date).into(),
            time: (*time).into(),
        }))
    }

    #[test]
    fn groups_by_date_in_ascending_order() {
        let records = records(&[
            ("1", "2024-01-16", "08:00"),
            ("2", "2024-01-15", "08:00"),
            ("3", "2024-01-16", "08:00"),
            ("1", "2024-01-15", "08:00"),
        ]);
        let view = DayView::new(&records);

        let shape: Vec<(&str, Vec<&str>)> = view
            .groups()
            .iter()
            .map(|g| (g.date, g.records.iter().map(|r| r.employee_id()).collect()))
            .collect();
        assert_eq!(
            shape,
            [
                ("2024-01-15", vec!["2", "1"]),
                ("2024-01-16", vec!["1", "3"]),
            ]
        );
        assert_eq!(view.len(), 4);
        assert_eq!(
            view.records().map(AttendanceRecord::employee_id).collect::<Vec<_>>(),
            ["2", "1", "1", "3"]
        );
    }

    #[test]
    fn empty_view() {
        let view = DayView::new(std::iter::empty());
        assert!(view.is_empty());
        assert_eq!(view.len(), 0);
    }

    #[test]
    fn formats_iso_dates() {
        assert_eq!(format_date("2024-01-05"), "05/01/2024");
        assert_eq!(format_date("2024/01/05"), "2024/01/05");
        assert_eq!(format_date("2024-01-05-x"), "2024-01-05-x");
    }

    #[test]
    fn display_cells_use_placeholders() {
        let records = records(&[("7", "2024-03-01", "09:15")]);
        assert_eq!(
            display_cells(&records[0]),
            [
                "7".to_string(),
                "Empleado 7".to_string(),
                "01/03/2024".to_string(),
                "09:15".to_string(),
                NO_EXIT.to_string(),
                "Sin registro".to_string(),
            ]
        );
    }
}

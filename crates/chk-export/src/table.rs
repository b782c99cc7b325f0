//! Plain-text table for terminal output.

use std::io::Write;

use chk_core::{DayView, display_cells, format_date};

use crate::{COLUMNS, ExportError};

const GAP: &str = "  ";

/// Writes `view` as an aligned table with a separator line before each date.
pub fn write_table<W: Write>(writer: &mut W, view: &DayView<'_>) -> Result<(), ExportError> {
    let rows: Vec<[String; 6]> = view.records().map(display_cells).collect();

    let mut widths = COLUMNS.map(|title| title.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_row(writer, &COLUMNS, &widths)?;

    let mut rows = rows.iter();
    for group in view.groups() {
        writeln!(writer, "-- {} --", format_date(group.date))?;
        for row in rows.by_ref().take(group.records.len()) {
            write_row(writer, row, &widths)?;
        }
    }
    Ok(())
}

fn write_row<W: Write, S: AsRef<str>>(
    writer: &mut W,
    cells: &[S],
    widths: &[usize],
) -> Result<(), ExportError> {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:<width$}", cell.as_ref()))
        .collect::<Vec<_>>()
        .join(GAP);
    writeln!(writer, "{}", line.trim_end())?;
    Ok(())
}

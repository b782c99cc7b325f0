//! CSV rendering.
//!
//! Output starts with a UTF-8 byte-order mark so spreadsheet applications
//! pick the right encoding. Every data cell is quoted.

use std::io::Write;

use chk_core::{DayView, format_date};
use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::ExportError;

pub const BOM: &str = "\u{feff}";

pub const HEADER: &str =
    "No de Empleado,Nombre,Fecha,Registro de entrada,Registro de salida,Horas laboradas";

/// Writes `view` as CSV. Missing entry/exit punches become empty cells.
pub fn write_csv<W: Write>(mut writer: W, view: &DayView<'_>) -> Result<(), ExportError> {
    writer.write_all(BOM.as_bytes())?;
    writeln!(writer, "{HEADER}")?;

    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    for record in view.records() {
        wtr.write_record([
            record.employee_id().to_string(),
            record.name().to_string(),
            format_date(record.date()),
            record.entry().unwrap_or_default().to_string(),
            record.exit().unwrap_or_default().to_string(),
            record.worked_label(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use chk_core::RecordStore;
    use insta::assert_snapshot;

    fn render(text: &str) -> String {
        let store = RecordStore::from_text(text);
        let view = DayView::new(store.records());
        let mut out = Vec::new();
        write_csv(&mut out, &view).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn writes_bom_header_and_sorted_rows() {
        let text = [
            "1\t1\t2\tLuis Peña\tFP\t1\t0\t0\t0\t2024-01-16  22:00:00",
            "1\t1\t1\tAna Ruiz\tFP\t1\t0\t0\t0\t2024-01-15  08:00:00",
            "1\t1\t1\tAna Ruiz\tFP\t1\t0\t0\t0\t2024-01-15  17:30:00",
        ]
        .join("\n");

        let output = render(&text);
        let output = output.strip_prefix(BOM).unwrap();

        assert_snapshot!(output, @r#"
        No de Empleado,Nombre,Fecha,Registro de entrada,Registro de salida,Horas laboradas
        "1","Ana Ruiz","15/01/2024","08:00:00","17:30:00","9h 30m"
        "2","Luis Peña","16/01/2024","22:00:00","","Sin registro"
        "#);
    }

    #[test]
    fn escapes_embedded_quotes() {
        let output = render("1\t1\t3\tJosé \"Pepe\" Gil\tFP\t1\t0\t0\t0\t2024-01-15  08:00");
        assert!(output.contains(r#""José ""Pepe"" Gil""#));
    }

    #[test]
    fn empty_view_writes_header_only() {
        let output = render("");
        assert_eq!(output, format!("{BOM}{HEADER}\n"));
    }
}

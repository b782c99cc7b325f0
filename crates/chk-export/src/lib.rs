//! Renderers for attendance views.
//!
//! Every renderer consumes a [`DayView`], so rows are always date-sorted and
//! date boundaries are visible:
//! - [`table`]: aligned plain text for the terminal
//! - [`csv_report`]: spreadsheet-friendly CSV with a byte-order mark
//! - [`pdf_report`]: printable A4 attendance sheet

pub mod csv_report;
pub mod pdf_report;
pub mod table;

use std::fs;
use std::path::{Path, PathBuf};

use chk_core::DayView;
use chrono::NaiveDate;
use thiserror::Error;

pub use pdf_report::PdfOptions;

/// The six column titles, shared by table and PDF output.
pub const COLUMNS: [&str; 6] = [
    "No de Empleado",
    "Nombre",
    "Fecha",
    "Registro de Entrada",
    "Registro de Salida",
    "Horas Laboradas",
];

/// Export errors.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Writing output failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// The CSV writer failed.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    /// The PDF document could not be built.
    #[error("pdf error: {0}")]
    Pdf(#[from] printpdf::Error),
}

/// File formats an attendance view can be exported to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// UTF-8 CSV with a byte-order mark, for spreadsheet applications.
    Csv,
    /// A4 attendance sheet.
    Pdf,
}

impl ExportFormat {
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Pdf => "pdf",
        }
    }
}

/// Name of an export file produced on `date`: `checador_<YYYY-MM-DD>.<ext>`.
pub fn export_file_name(format: ExportFormat, date: NaiveDate) -> String {
    format!("checador_{}.{}", date.format("%Y-%m-%d"), format.extension())
}

/// Renders `view` in `format` into `dir`, returning the written path.
///
/// The directory is created if needed. An existing file of the same name is
/// overwritten.
pub fn export_to_dir(
    view: &DayView<'_>,
    format: ExportFormat,
    dir: &Path,
    date: NaiveDate,
    options: &PdfOptions,
) -> Result<PathBuf, ExportError> {
    let bytes = match format {
        ExportFormat::Csv => {
            let mut buf = Vec::new();
            csv_report::write_csv(&mut buf, view)?;
            buf
        }
        ExportFormat::Pdf => pdf_report::render_pdf(view, options)?,
    };

    fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(format, date));
    fs::write(&path, bytes)?;

    tracing::info!(
        path = %path.display(),
        records = view.len(),
        format = format.extension(),
        "export written"
    );
    Ok(path)
}

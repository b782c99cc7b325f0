//! Export command for writing CSV and PDF files.
//!
//! Exports honour the same search and date filters as `show`. When there is
//! nothing to export a notice is printed and no file is written.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chk_core::DayView;
use chk_export::export_to_dir;
use chrono::NaiveDate;

use super::util::{load_session, warn_if_inverted};
use crate::Config;
use crate::cli::ExportArgs;

/// Runs the export, naming the file after `today`.
///
/// Returns the written path, or `None` when there was nothing to export.
pub fn run<W: Write>(
    writer: &mut W,
    args: &ExportArgs,
    config: &Config,
    today: NaiveDate,
) -> Result<Option<PathBuf>> {
    let session = load_session(&args.file)?;
    if session.store().is_empty() {
        writeln!(writer, "No data to export.")?;
        return Ok(None);
    }

    let criteria = args.filter.criteria();
    warn_if_inverted(&criteria);
    let view = DayView::new(session.filter(&criteria));
    if view.is_empty() {
        writeln!(writer, "No records match the current filters; nothing exported.")?;
        return Ok(None);
    }

    let dir = args.out_dir.as_ref().unwrap_or(&config.output_dir);
    let path = export_to_dir(&view, args.format, dir, today, &config.pdf_options())
        .with_context(|| format!("failed to export to {}", dir.display()))?;

    writeln!(writer, "Exported {} records to {}", view.len(), path.display())?;
    Ok(Some(path))
}

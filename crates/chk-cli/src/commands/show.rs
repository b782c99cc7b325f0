//! Show command for printing attendance records.

use std::io::Write;

use anyhow::{Context, Result};
use chk_core::DayView;
use chk_export::table::write_table;

use super::util::{load_session, warn_if_inverted};
use crate::cli::ShowArgs;

pub fn run<W: Write>(writer: &mut W, args: &ShowArgs) -> Result<()> {
    let session = load_session(&args.file)?;
    let criteria = args.filter.criteria();
    warn_if_inverted(&criteria);

    let view = DayView::new(session.filter(&criteria));

    if args.json {
        let records: Vec<_> = view.records().collect();
        serde_json::to_writer_pretty(&mut *writer, &records)
            .context("failed to serialize records")?;
        writeln!(writer)?;
        return Ok(());
    }

    if view.is_empty() {
        writeln!(writer, "No records found.")?;
        return Ok(());
    }

    write_table(writer, &view)?;
    writeln!(writer, "{} records", view.len())?;
    Ok(())
}

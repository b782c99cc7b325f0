//! Summary command for inspecting what was read from an export.

use std::io::Write;

use anyhow::{Context, Result};
use chk_core::{LoadReport, format_date};
use serde::Serialize;

use super::util::load_session;
use crate::cli::SummaryArgs;

/// Summary output for JSON.
#[derive(Debug, Serialize)]
struct Summary<'a> {
    file: String,
    #[serde(flatten)]
    report: &'a LoadReport,
    employees: usize,
    first_date: Option<&'a str>,
    last_date: Option<&'a str>,
}

pub fn run<W: Write>(writer: &mut W, args: &SummaryArgs) -> Result<()> {
    let session = load_session(&args.file)?;
    let store = session.store();
    let report = store.report();
    let span = store.date_span();

    let summary = Summary {
        file: args.file.display().to_string(),
        report,
        employees: store.employee_count(),
        first_date: span.map(|(first, _)| first),
        last_date: span.map(|(_, last)| last),
    };

    if args.json {
        serde_json::to_writer_pretty(&mut *writer, &summary)
            .context("failed to serialize summary")?;
        writeln!(writer)?;
        return Ok(());
    }

    writeln!(writer, "File:      {}", summary.file)?;
    writeln!(writer, "Lines:     {}", report.lines)?;
    writeln!(writer, "Punches:   {}", report.punches)?;
    writeln!(writer, "Records:   {}", report.records)?;
    writeln!(writer, "Employees: {}", summary.employees)?;
    if let Some((first, last)) = span {
        writeln!(
            writer,
            "Dates:     {} to {}",
            format_date(first),
            format_date(last)
        )?;
    }

    writeln!(writer, "Skipped:   {}", report.skipped_total())?;
    for (reason, count) in &report.skipped {
        writeln!(writer, "- {reason}: {count}")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    const EXPORT: &str = "# Reloj 1\n\
        No\tTMNo\tEnNo\tName\tGMNo\tMode\tIn/Out\tAntipass\tProxyWork\tDateTime\n\
        1\t1\t7\tAna\tFP\t1\t0\t0\t0\t2024-01-15  08:00\n\
        1\t1\t9\tLuis\tFP\t1\t0\t0\t0\t2024-01-17  09:00\n\
        1\t1\t9\tLuis\tFP\t1\t0\t0\t0\t2024-01-17\n\
        1\t1\t9\tLuis\n";

    fn summary(json: bool) -> String {
        let temp = tempfile::tempdir().unwrap();
        let file = temp.path().join("punches.txt");
        std::fs::write(&file, EXPORT).unwrap();

        let args = SummaryArgs { file: file.clone(), json };
        let mut output = Vec::new();
        run(&mut output, &args).unwrap();
        String::from_utf8(output)
            .unwrap()
            .replace(&file.display().to_string(), "[TEMP]/punches.txt")
    }

    #[test]
    fn summary_lists_counts_and_skips() {
        assert_snapshot!(summary(false), @r"
        File:      [TEMP]/punches.txt
        Lines:     6
        Punches:   2
        Records:   2
        Employees: 2
        Dates:     15/01/2024 to 17/01/2024
        Skipped:   4
        - comment: 1
        - header: 1
        - missing_timestamp: 1
        - too_few_fields: 1
        ");
    }

    #[test]
    fn summary_as_json() {
        let value: serde_json::Value = serde_json::from_str(&summary(true)).unwrap();
        assert_eq!(value["file"], "[TEMP]/punches.txt");
        assert_eq!(value["records"], 2);
        assert_eq!(value["employees"], 2);
        assert_eq!(value["first_date"], "2024-01-15");
        assert_eq!(value["last_date"], "2024-01-17");
        assert_eq!(value["skipped"]["too_few_fields"], 1);
    }
}

//! Command-line argument definitions.

use std::path::PathBuf;

use chk_core::{FilterCriteria, parse_iso_date};
use chk_export::ExportFormat;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

/// Attendance reconstruction for time-clock exports.
///
/// Reads a tab-separated punch export, builds one record per employee and
/// day with entry, exit and worked time, and shows or exports the result.
#[derive(Debug, Parser)]
#[command(name = "checador", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print attendance records grouped by date.
    Show(ShowArgs),

    /// Write attendance records to a CSV or PDF file.
    Export(ExportArgs),

    /// Summarize what was read from an export.
    Summary(SummaryArgs),
}

/// Search and date-range options shared by `show` and `export`.
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Match employee name or number (case-insensitive).
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// First date to include (YYYY-MM-DD).
    #[arg(long, value_parser = parse_iso_date)]
    pub from: Option<NaiveDate>,

    /// Last date to include (YYYY-MM-DD).
    #[arg(long, value_parser = parse_iso_date)]
    pub to: Option<NaiveDate>,
}

impl FilterArgs {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            text: self.search.clone(),
            date_from: self.from,
            date_to: self.to,
        }
    }
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Time-clock export to read.
    pub file: PathBuf,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Output records as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Time-clock export to read.
    pub file: PathBuf,

    /// Output format.
    #[arg(short, long, value_enum)]
    pub format: ExportFormat,

    /// Directory to write into (defaults to `output_dir` from config).
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    #[command(flatten)]
    pub filter: FilterArgs,
}

#[derive(Debug, Args)]
pub struct SummaryArgs {
    /// Time-clock export to read.
    pub file: PathBuf,

    /// Output the summary as JSON.
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_show_with_filters() {
        let cli = Cli::try_parse_from([
            "checador", "show", "punches.txt", "--search", "ana", "--from", "2024-01-10",
            "--to", "2024-01-15",
        ])
        .unwrap();

        let Some(Commands::Show(args)) = cli.command else {
            panic!("expected show command");
        };
        let criteria = args.filter.criteria();
        assert_eq!(criteria.text, "ana");
        assert_eq!(criteria.date_from, NaiveDate::from_ymd_opt(2024, 1, 10));
        assert_eq!(criteria.date_to, NaiveDate::from_ymd_opt(2024, 1, 15));
    }

    #[test]
    fn rejects_malformed_dates() {
        let result = Cli::try_parse_from(["checador", "show", "punches.txt", "--from", "10/01/2024"]);
        assert!(result.is_err());
    }

    #[test]
    fn parses_export_format() {
        let cli =
            Cli::try_parse_from(["checador", "export", "punches.txt", "--format", "pdf"]).unwrap();
        let Some(Commands::Export(args)) = cli.command else {
            panic!("expected export command");
        };
        assert_eq!(args.format, ExportFormat::Pdf);
        assert!(args.out_dir.is_none());
        assert_eq!(args.filter.criteria(), FilterCriteria::default());
    }
}

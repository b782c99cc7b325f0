//! Checador CLI library.
//!
//! This crate provides the CLI interface for attendance reconstruction.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands, ExportArgs, FilterArgs, ShowArgs, SummaryArgs};
pub use config::Config;

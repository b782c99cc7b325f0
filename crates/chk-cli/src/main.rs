use std::io::{Write, stdout};

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use chk_cli::commands::{export, show, summary};
use chk_cli::{Cli, Commands, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let mut out = stdout().lock();
    match &cli.command {
        Some(Commands::Show(args)) => show::run(&mut out, args)?,
        Some(Commands::Export(args)) => {
            let config =
                Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
            tracing::debug!(?config, "loaded configuration");
            export::run(&mut out, args, &config, Local::now().date_naive())?;
        }
        Some(Commands::Summary(args)) => summary::run(&mut out, args)?,
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            writeln!(out)?;
        }
    }

    Ok(())
}

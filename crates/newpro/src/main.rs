//! newpro CLI - scaffold Go, Astro and C++ projects from an interactive menu
//!
//! This is the main entry point for the newpro command-line interface.

mod cli;
mod commands;
mod output;
mod view;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use newpro_projects::NewproConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    let (config, origin) = NewproConfig::load(cli.config.as_deref())?;
    match &origin {
        Some(path) => tracing::info!("Loaded config from {}", path),
        None => tracing::debug!("No config file found, using defaults"),
    }

    match cli.command {
        None => commands::wizard::run(&config, &cli.dir).await,
        Some(Commands::Templates) => commands::templates::run(&config, origin.as_deref()),
        Some(Commands::Completions(args)) => commands::completions::run(args),
    }
}

/// Initialize tracing with appropriate verbosity
///
/// Logs go to stderr so they never interleave with the wizard screen on stdout.
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

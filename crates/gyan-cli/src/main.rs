//! gyan CLI - front-page content for the Gyan Ladoo literature site
//!
//! This is the main entry point for the gyan command-line interface.
//! Command implementations live in separate modules; this file only wires
//! argument parsing, logging, and dispatch together.

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_logging(&cli)?;

    match &cli.command {
        Some(Commands::Posts) => commands::posts::execute(&cli).await,
        Some(Commands::Categories) => commands::categories::execute(&cli).await,
        Some(Commands::Show) | None => commands::show::execute(&cli).await,
    }
}

/// Initialize the logging subsystem based on CLI flags.
///
/// Machine-readable output suppresses info logs and colors so stdout stays
/// clean; diagnostics always go to stderr.
fn initialize_logging(cli: &Cli) -> Result<()> {
    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet || cli.format.is_machine() {
        Level::ERROR
    } else {
        Level::WARN
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let env_no_color = std::env::var("NO_COLOR").is_ok();
    if cli.no_color || env_no_color || cli.format.is_machine() {
        colored::control::set_override(false);
    }
    Ok(())
}

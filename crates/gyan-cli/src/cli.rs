//! Command-line interface definition.

use crate::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Front-page content for the Gyan Ladoo literature site.
///
/// Loads posts and categories from the content API and renders them as text
/// or JSON. When the API is unreachable the built-in collection is shown
/// instead, so there is always something to read.
#[derive(Debug, Parser)]
#[command(name = "gyan", version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run; defaults to `show`.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Override the content API endpoint for this invocation.
    #[arg(long, global = true, env = "GYAN_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Use an explicit config file instead of the platform default.
    #[arg(long, global = true, env = "GYAN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format.
    #[arg(short = 'f', long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Load and render the full front page (default)
    Show,
    /// Print only the posts
    Posts,
    /// Print only the categories
    Categories,
}

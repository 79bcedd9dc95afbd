//! Output format selection.
//!
//! Text output is for humans; JSON and JSONL are stable shapes for scripts.
//! When a machine-readable format is selected, logging is reduced and colors
//! are disabled so stdout stays clean.

use clap::ValueEnum;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output with colors.
    Text,
    /// A single pretty-printed JSON object.
    Json,
    /// Newline-delimited JSON, one object per line.
    Jsonl,
}

impl OutputFormat {
    /// Returns `true` for formats meant for programmatic consumption.
    #[must_use]
    pub const fn is_machine(self) -> bool {
        matches!(self, Self::Json | Self::Jsonl)
    }
}

//! Command-line argument definitions for gazehound
//!
//! This module defines the CLI interface using the clap derive API.

use crate::config::{ParseOverrides, ReaderConfig};
use crate::constants::{DEFAULT_COMMENT_CHAR, DEFAULT_LOG_LEVEL};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the iView export reader
#[derive(Debug, Clone, Parser)]
#[command(
    name = "gazehound",
    version,
    about = "Read SMI iView eyetracking exports",
    long_about = "Reads text exports written by SMI's iView software. Prints the typed \
                  metadata header from the file's leading comment block, or the \
                  delimited sample rows that follow it."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase logging verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Print the typed header of an export
    Header(HeaderArgs),
    /// Print the data rows of an export
    Rows(RowsArgs),
}

/// Arguments for the header command
#[derive(Debug, Clone, Parser)]
pub struct HeaderArgs {
    /// iView export file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    #[command(flatten)]
    pub reader: ReaderArgs,
}

/// Arguments for the rows command
#[derive(Debug, Clone, Parser)]
pub struct RowsArgs {
    /// iView export file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Stop after this many rows
    #[arg(short = 'n', long = "limit", value_name = "N")]
    pub limit: Option<usize>,

    #[command(flatten)]
    pub reader: ReaderArgs,
}

/// Reader settings shared by every command
#[derive(Debug, Clone, clap::Args)]
pub struct ReaderArgs {
    /// Marker that starts a comment line
    #[arg(long = "comment-char", value_name = "MARKER", default_value = DEFAULT_COMMENT_CHAR)]
    pub comment_char: String,

    /// Treat the leading comment block as data rows
    #[arg(long = "no-skip-comments")]
    pub no_skip_comments: bool,

    /// Field delimiter (a single character, or "tab")
    #[arg(short = 'd', long = "delimiter", value_name = "CHAR", value_parser = parse_dialect_char)]
    pub delimiter: Option<char>,

    /// Quote character
    #[arg(long = "quote", value_name = "CHAR", value_parser = parse_dialect_char)]
    pub quote: Option<char>,

    /// Strip whitespace around every field
    #[arg(long = "trim")]
    pub trim: bool,
}

impl ReaderArgs {
    /// Build the reader configuration these arguments describe
    pub fn to_config(&self) -> ReaderConfig {
        let mut overrides = ParseOverrides::default();
        if let Some(delimiter) = self.delimiter {
            overrides = overrides.with_delimiter(delimiter);
        }
        if let Some(quote) = self.quote {
            overrides = overrides.with_quote(quote);
        }
        if self.trim {
            overrides = overrides.with_trim_fields(true);
        }

        ReaderConfig::default()
            .with_skip_comments(!self.no_skip_comments)
            .with_comment_char(self.comment_char.clone())
            .with_overrides(&overrides)
    }
}

impl Args {
    /// Get the log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => DEFAULT_LOG_LEVEL,
                1 => "debug",
                _ => "trace",
            }
        }
    }
}

/// Parse a dialect character, accepting `tab` and `\t` for the tab character
fn parse_dialect_char(value: &str) -> std::result::Result<char, String> {
    if matches!(value, "tab" | "\\t") {
        return Ok('\t');
    }

    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(format!("expected a single character, got '{}'", value)),
    }
}

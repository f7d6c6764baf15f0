//! Command implementations for the gazehound CLI
//!
//! Each command lives in its own module:
//! - `header`: print the typed metadata header
//! - `rows`: print the delimited data rows

pub mod header;
pub mod rows;
pub mod shared;

pub use shared::setup_logging;

use crate::cli::args::{Args, Commands};

/// Main command runner; dispatches to the subcommand handler
pub fn run(args: Args) -> anyhow::Result<()> {
    match args.command {
        Commands::Header(header_args) => header::run_header(&header_args),
        Commands::Rows(rows_args) => rows::run_rows(&rows_args),
    }
}

//! Rows command: print the data rows of an export

use crate::cli::args::RowsArgs;
use crate::cli::commands::shared::open_reader;
use anyhow::{Context, Result};
use colored::*;
use std::io::{self, Write};
use tracing::info;

pub fn run_rows(args: &RowsArgs) -> Result<()> {
    let mut reader = open_reader(&args.file, &args.reader)?;
    let total = reader.len();
    let limit = args.limit.unwrap_or(usize::MAX);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut printed = 0;

    for row in reader.by_ref().take(limit) {
        let row = row.with_context(|| format!("Bad data row in '{}'", args.file.display()))?;
        writeln!(out, "{}", row.join("\t"))?;
        printed += 1;
    }
    out.flush()?;

    info!("Printed {} of {} data lines", printed, total);
    eprintln!(
        "{} {} rows from {}",
        "Read".green().bold(),
        printed,
        args.file.display()
    );
    Ok(())
}

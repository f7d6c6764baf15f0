//! Header command: print the typed metadata of an export

use crate::Header;
use crate::cli::args::HeaderArgs;
use crate::cli::commands::shared::open_reader;
use anyhow::{Context, Result};
use colored::*;
use tracing::info;

pub fn run_header(args: &HeaderArgs) -> Result<()> {
    let reader = open_reader(&args.file, &args.reader)?;
    let header = reader
        .header()
        .with_context(|| format!("Invalid header in '{}'", args.file.display()))?;

    info!(
        "Read {} header fields from {}",
        header.len(),
        args.file.display()
    );

    if header.is_empty() {
        println!("{}", "No recognised header fields".yellow());
        return Ok(());
    }

    print!("{}", render_header(&header));
    Ok(())
}

/// One `name: value` line per field, names aligned
pub fn render_header(header: &Header) -> String {
    let width = header.keys().map(str::len).max().unwrap_or(0);
    let mut out = String::new();
    for (key, value) in header.iter() {
        out.push_str(&format!(
            "{}: {}\n",
            format!("{:<width$}", key, width = width).cyan(),
            value
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HeaderValue;

    #[test]
    fn test_render_header_aligns_names() {
        colored::control::set_override(false);

        let header: Header = vec![
            ("subject", HeaderValue::from("sub01")),
            ("sample_rate", HeaderValue::from(60i64)),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            render_header(&header),
            "subject    : sub01\nsample_rate: 60\n"
        );
    }
}

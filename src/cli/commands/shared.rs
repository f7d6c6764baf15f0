//! Shared components for CLI commands

use crate::IViewReader;
use crate::cli::args::ReaderArgs;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

/// Set up structured logging on stderr
///
/// `RUST_LOG` takes precedence over the level chosen on the command line.
pub fn setup_logging(log_level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("gazehound={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
}

/// Open an export with the reader settings from the command line
pub fn open_reader(path: &Path, reader_args: &ReaderArgs) -> Result<IViewReader> {
    let config = reader_args.to_config();
    IViewReader::from_path(path, config)
        .with_context(|| format!("Failed to open iView export '{}'", path.display()))
}

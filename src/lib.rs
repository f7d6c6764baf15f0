//! gazehound Library
//!
//! A Rust library for reading text exports from SMI's iView eyetracking
//! software.
//!
//! This library provides tools for:
//! - Splitting a file into its leading comment block and its data rows
//! - Lazily parsing data rows with a configurable delimiter dialect
//! - Extracting the iView metadata header into typed values
//! - Loading export files from disk for the command line tool

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod delimited_reader;
        pub mod iview_reader;
    }
    pub mod adapters {
        pub mod filesystem;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Header, HeaderValue, Row};
pub use app::services::delimited_reader::{CommentSource, DelimitedReader};
pub use app::services::iview_reader::IViewReader;
pub use config::{ParseOptions, ParseOverrides, ReaderConfig};

/// Result type alias for gazehound
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for reading eyetracking exports
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// The row splitter rejected a data line
    #[error("Row parsing error at line {line}: {message}")]
    RowParsing {
        line: u64,
        message: String,
        #[source]
        source: csv::Error,
    },

    /// A header value could not be converted to its declared type
    #[error("Cannot convert header '{key}' value '{value}': {source}")]
    HeaderConversion {
        key: String,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a row parsing error for 1-based input `line`
    pub fn row_parsing(line: u64, message: impl Into<String>, source: csv::Error) -> Self {
        Self::RowParsing {
            line,
            message: message.into(),
            source,
        }
    }

    /// Create a header conversion error
    pub fn header_conversion(
        key: impl Into<String>,
        value: impl Into<String>,
        source: std::num::ParseIntError,
    ) -> Self {
        Self::HeaderConversion {
            key: key.into(),
            value: value.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line()).unwrap_or(0);
        Self::row_parsing(line, "CSV parsing failed", error)
    }
}

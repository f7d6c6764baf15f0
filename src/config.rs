//! Configuration management and validation.
//!
//! Provides the reader configuration: comment-block handling and the
//! delimiter dialect handed to the row splitter.

use crate::constants::{DEFAULT_COMMENT_CHAR, DEFAULT_DELIMITER, DEFAULT_QUOTE};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Delimiter dialect used to split a data line into fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    /// Field delimiter
    pub delimiter: char,

    /// Quote character
    pub quote: char,

    /// Escape character for quotes inside quoted fields (None = doubled quotes only)
    pub escape: Option<char>,

    /// Treat two consecutive quotes inside a quoted field as one literal quote
    pub double_quote: bool,

    /// Honour quoting at all; when false quote characters are ordinary text
    pub quoting: bool,

    /// Strip surrounding whitespace from every field
    pub trim_fields: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            quote: DEFAULT_QUOTE,
            escape: None,
            double_quote: true,
            quoting: true,
            trim_fields: false,
        }
    }
}

/// Caller-supplied dialect settings; unset fields keep their defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOverrides {
    pub delimiter: Option<char>,
    pub quote: Option<char>,
    pub escape: Option<Option<char>>,
    pub double_quote: Option<bool>,
    pub quoting: Option<bool>,
    pub trim_fields: Option<bool>,
}

impl ParseOverrides {
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    pub fn with_quote(mut self, quote: char) -> Self {
        self.quote = Some(quote);
        self
    }

    pub fn with_escape(mut self, escape: Option<char>) -> Self {
        self.escape = Some(escape);
        self
    }

    pub fn with_trim_fields(mut self, trim: bool) -> Self {
        self.trim_fields = Some(trim);
        self
    }

    pub fn without_quoting(mut self) -> Self {
        self.quoting = Some(false);
        self
    }
}

impl ParseOptions {
    /// Return a copy of these options with every set override applied
    pub fn merged(&self, overrides: &ParseOverrides) -> Self {
        Self {
            delimiter: overrides.delimiter.unwrap_or(self.delimiter),
            quote: overrides.quote.unwrap_or(self.quote),
            escape: overrides.escape.unwrap_or(self.escape),
            double_quote: overrides.double_quote.unwrap_or(self.double_quote),
            quoting: overrides.quoting.unwrap_or(self.quoting),
            trim_fields: overrides.trim_fields.unwrap_or(self.trim_fields),
        }
    }

    /// Default dialect with the given overrides applied
    pub fn from_overrides(overrides: &ParseOverrides) -> Self {
        Self::default().merged(overrides)
    }

    /// Check that every dialect character fits in a single byte
    pub fn validate(&self) -> Result<()> {
        ascii_byte("delimiter", self.delimiter)?;
        ascii_byte("quote", self.quote)?;
        if let Some(escape) = self.escape {
            ascii_byte("escape", escape)?;
        }
        Ok(())
    }

    /// Build a csv reader configured with this dialect
    ///
    /// Rows are read without a header record and without field-count
    /// checks, so ragged rows pass through unchanged. Fails when a dialect
    /// character does not fit in a single byte.
    pub fn to_reader_builder(&self) -> Result<csv::ReaderBuilder> {
        let delimiter = ascii_byte("delimiter", self.delimiter)?;
        let quote = ascii_byte("quote", self.quote)?;
        let escape = self.escape.map(|c| ascii_byte("escape", c)).transpose()?;

        let mut builder = csv::ReaderBuilder::new();
        builder
            .has_headers(false)
            .flexible(true)
            .delimiter(delimiter)
            .quote(quote)
            .escape(escape)
            .double_quote(self.double_quote)
            .quoting(self.quoting)
            .trim(if self.trim_fields {
                csv::Trim::Fields
            } else {
                csv::Trim::None
            });
        Ok(builder)
    }
}

fn ascii_byte(name: &str, c: char) -> Result<u8> {
    if c.is_ascii() {
        Ok(c as u8)
    } else {
        Err(Error::configuration(format!(
            "{} must be a single ASCII character, got '{}'",
            name, c
        )))
    }
}

/// Reader configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReaderConfig {
    /// Drop the leading comment block from the data rows
    pub skip_comments: bool,

    /// Marker that starts a comment line
    pub comment_char: String,

    /// Dialect for splitting data lines
    pub parse_options: ParseOptions,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            skip_comments: true,
            comment_char: DEFAULT_COMMENT_CHAR.to_string(),
            parse_options: ParseOptions::default(),
        }
    }
}

impl ReaderConfig {
    pub fn with_skip_comments(mut self, skip: bool) -> Self {
        self.skip_comments = skip;
        self
    }

    pub fn with_comment_char(mut self, comment_char: impl Into<String>) -> Self {
        self.comment_char = comment_char.into();
        self
    }

    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse_options = options;
        self
    }

    /// Apply dialect overrides on top of the current parse options
    pub fn with_overrides(mut self, overrides: &ParseOverrides) -> Self {
        self.parse_options = self.parse_options.merged(overrides);
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.comment_char.is_empty() {
            return Err(Error::configuration("comment marker must not be empty"));
        }
        self.parse_options.validate()?;

        debug!(
            "Reader configuration valid: skip_comments={}, comment_char={:?}, delimiter={:?}",
            self.skip_comments, self.comment_char, self.parse_options.delimiter
        );
        Ok(())
    }
}

//! The iView reader: a delimited reader plus header extraction

use std::path::Path;

use super::header::extract_header;
use crate::app::models::{Header, Row};
use crate::app::services::delimited_reader::{CommentSource, DelimitedReader};
use crate::config::ReaderConfig;
use crate::Result;

/// A reader for files produced by SMI's iView software
///
/// Wraps a [`DelimitedReader`]; iterating yields the same data rows, and
/// [`header`](IViewReader::header) types the comment block.
#[derive(Debug)]
pub struct IViewReader {
    source: DelimitedReader,
}

impl IViewReader {
    pub fn new<I, S>(lines: I, config: ReaderConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self::from_source(DelimitedReader::new(lines, config)?))
    }

    pub fn with_defaults<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_source(DelimitedReader::with_defaults(lines))
    }

    /// Load an iView export from disk
    pub fn from_path(path: &Path, config: ReaderConfig) -> Result<Self> {
        Ok(Self::from_source(DelimitedReader::from_path(path, config)?))
    }

    pub fn from_source(source: DelimitedReader) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &DelimitedReader {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut DelimitedReader {
        &mut self.source
    }

    pub fn into_inner(self) -> DelimitedReader {
        self.source
    }

    /// Typed metadata from the comment block
    ///
    /// Recomputed from the raw lines on every call, so it is unaffected by
    /// how many rows have been read.
    pub fn header(&self) -> Result<Header> {
        extract_header(&self.source)
    }

    pub fn comment_lines(&self) -> &[String] {
        self.source.comment_lines()
    }

    pub fn len(&mut self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&mut self) -> bool {
        self.source.is_empty()
    }
}

impl Iterator for IViewReader {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        self.source.next()
    }
}

impl std::iter::FusedIterator for IViewReader {}

impl CommentSource for IViewReader {
    fn comment_char(&self) -> &str {
        CommentSource::comment_char(&self.source)
    }

    fn comment_lines(&self) -> &[String] {
        self.source.comment_lines()
    }
}

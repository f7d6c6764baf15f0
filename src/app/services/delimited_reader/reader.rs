//! Memoized, single-pass delimited reader

use std::cell::OnceCell;
use std::fmt;
use std::io::Cursor;
use std::iter::FusedIterator;
use std::path::Path;

use tracing::debug;

use super::CommentSource;
use super::comments::comment_block_end;
use crate::app::adapters::filesystem;
use crate::app::models::Row;
use crate::config::ReaderConfig;
use crate::{Error, Result};

type RecordIter = csv::StringRecordsIntoIter<Cursor<Vec<u8>>>;

/// Progress of the row parser
enum RowState {
    /// Parser not built yet
    Pending,
    /// Parser built, rows remaining
    Active(RowCursor),
    /// The parser could not be built; the error is reported as the only row
    Failed(Error),
    /// Every row has been produced
    Exhausted,
}

impl fmt::Debug for RowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowState::Pending => write!(f, "Pending"),
            RowState::Active(_) => write!(f, "Active"),
            RowState::Failed(e) => write!(f, "Failed({})", e),
            RowState::Exhausted => write!(f, "Exhausted"),
        }
    }
}

/// Line number in the input for a 1-based line of the cleaned-line buffer
pub(crate) fn input_line(data_start: usize, buffer_line: u64) -> u64 {
    data_start as u64 + buffer_line
}

/// Walks csv records and reports the blank lines the csv parser skips
///
/// Every cleaned line ends with exactly one `\n` in the buffer, so the
/// parser's line counter tells how many cleaned lines each read consumed.
/// Lines consumed beyond those the record itself spans were blank and come
/// out as empty rows, in their original position.
struct RowCursor {
    records: RecordIter,
    /// Offset of the first cleaned line in the input
    data_start: usize,
    /// Buffer lines consumed by the parser so far
    lines_read: u64,
    /// Blank rows still owed before `held`
    blank_rows: u64,
    /// Row read ahead of the blank lines that preceded it
    held: Option<Row>,
}

impl RowCursor {
    fn new(records: RecordIter, data_start: usize) -> Self {
        Self {
            records,
            data_start,
            lines_read: 0,
            blank_rows: 0,
            held: None,
        }
    }

    fn next_row(&mut self) -> Option<Result<Row>> {
        if self.blank_rows > 0 {
            self.blank_rows -= 1;
            return Some(Ok(Row::new()));
        }
        if let Some(row) = self.held.take() {
            return Some(Ok(row));
        }

        let next = self.records.next();
        let line_now = self.records.reader().position().line().saturating_sub(1);
        let consumed = line_now.saturating_sub(self.lines_read);
        self.lines_read = line_now;

        match next {
            Some(Ok(record)) => {
                let newlines: u64 = record.iter().map(|f| f.matches('\n').count() as u64).sum();
                let row: Row = record.iter().map(str::to_string).collect();
                self.blank_rows = consumed.saturating_sub(1 + newlines);
                if self.blank_rows == 0 {
                    return Some(Ok(row));
                }
                self.held = Some(row);
                self.next_row()
            }
            Some(Err(e)) => {
                let buffer_line = e
                    .position()
                    .map(|pos| pos.line())
                    .unwrap_or(self.lines_read + 1);
                let line = input_line(self.data_start, buffer_line);
                Some(Err(Error::row_parsing(line, "Failed to split data line", e)))
            }
            None => {
                // Trailing blank lines
                self.blank_rows = consumed;
                if consumed == 0 {
                    None
                } else {
                    self.next_row()
                }
            }
        }
    }
}

/// Converts a sequence of text lines into rows of fields
///
/// The cleaned view of the input (the comment block removed) and the row
/// parser are both built on first use and kept for the life of the reader.
/// Iteration is single-pass: once the rows run out, the reader stays empty.
/// Construct a new reader to read the same lines again.
#[derive(Debug)]
pub struct DelimitedReader {
    lines: Vec<String>,
    config: ReaderConfig,
    data_start: OnceCell<usize>,
    rows: RowState,
}

impl DelimitedReader {
    /// Create a reader over `lines` after validating `config`
    pub fn new<I, S>(lines: I, config: ReaderConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        config.validate()?;
        Ok(Self::build(lines, config))
    }

    /// Create a reader with the default configuration: skip `#` comments, tab-delimited
    pub fn with_defaults<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::build(lines, ReaderConfig::default())
    }

    /// Load `path` and create a reader over its lines
    pub fn from_path(path: &Path, config: ReaderConfig) -> Result<Self> {
        let lines = filesystem::read_lines(path)?;
        Self::new(lines, config)
    }

    fn build<I, S>(lines: I, config: ReaderConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            config,
            data_start: OnceCell::new(),
            rows: RowState::Pending,
        }
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Mutable access to the configuration
    ///
    /// Changes made after the cleaned lines or the row parser have been
    /// built do not affect them.
    pub fn config_mut(&mut self) -> &mut ReaderConfig {
        &mut self.config
    }

    /// The raw input lines
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Leading contiguous blank/comment lines, independent of consumption
    pub fn comment_lines(&self) -> &[String] {
        let end = comment_block_end(&self.lines, &self.config.comment_char);
        &self.lines[..end]
    }

    /// Input lines with the comment block removed, computed once
    pub fn cleaned_lines(&self) -> &[String] {
        &self.lines[self.data_start()..]
    }

    fn data_start(&self) -> usize {
        *self.data_start.get_or_init(|| {
            let start = if self.config.skip_comments {
                comment_block_end(&self.lines, &self.config.comment_char)
            } else {
                0
            };
            debug!(
                "Data starts at line {} of {} (skip_comments={})",
                start,
                self.lines.len(),
                self.config.skip_comments
            );
            start
        })
    }

    /// Number of cleaned lines; builds the row parser if needed
    ///
    /// Each cleaned line yields one row, blank lines as empty rows, unless
    /// a quoted field spans several lines.
    pub fn len(&mut self) -> usize {
        self.setup_parser();
        self.cleaned_lines().len()
    }

    pub fn is_empty(&mut self) -> bool {
        self.len() == 0
    }

    /// True once iteration has produced its last row
    pub fn is_exhausted(&self) -> bool {
        matches!(self.rows, RowState::Exhausted)
    }

    fn setup_parser(&mut self) {
        if !matches!(self.rows, RowState::Pending) {
            return;
        }

        let builder = match self.config.parse_options.to_reader_builder() {
            Ok(builder) => builder,
            Err(e) => {
                debug!("Row parser not built: {}", e);
                self.rows = RowState::Failed(e);
                return;
            }
        };

        let data_start = self.data_start();
        let cleaned = self.cleaned_lines();
        let mut buffer = String::with_capacity(cleaned.iter().map(|l| l.len() + 1).sum());
        for line in cleaned {
            buffer.push_str(line.trim_end_matches(['\r', '\n']));
            buffer.push('\n');
        }
        let line_count = cleaned.len();

        let records = builder
            .from_reader(Cursor::new(buffer.into_bytes()))
            .into_records();

        debug!("Row parser ready over {} cleaned lines", line_count);
        self.rows = RowState::Active(RowCursor::new(records, data_start));
    }
}

impl Iterator for DelimitedReader {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        self.setup_parser();

        match std::mem::replace(&mut self.rows, RowState::Exhausted) {
            RowState::Active(mut cursor) => {
                let next = cursor.next_row();
                if next.is_some() {
                    self.rows = RowState::Active(cursor);
                } else {
                    debug!("Row parser exhausted");
                }
                next
            }
            RowState::Failed(e) => Some(Err(e)),
            state => {
                self.rows = state;
                None
            }
        }
    }
}

impl FusedIterator for DelimitedReader {}

impl CommentSource for DelimitedReader {
    fn comment_char(&self) -> &str {
        &self.config.comment_char
    }

    fn comment_lines(&self) -> &[String] {
        DelimitedReader::comment_lines(self)
    }
}

//! Delimited line reader for text exports with a leading comment block
//!
//! Turns an already-loaded sequence of lines into field rows. Files written
//! by eyetracking software typically start with a run of `#`-prefixed
//! metadata lines; this reader can identify that run and leave it out of
//! the data rows.
//!
//! ## Architecture
//!
//! - [`comments`] - Detection of the leading comment block
//! - [`reader`] - The reader itself: memoized cleaning, lazy row parsing
//!
//! ## Usage
//!
//! ```rust
//! use gazehound::app::services::delimited_reader::DelimitedReader;
//!
//! let mut reader = DelimitedReader::with_defaults(vec!["#a", "#b", "x\ty"]);
//! assert_eq!(reader.comment_lines().len(), 2);
//!
//! let rows: Vec<_> = reader.by_ref().collect::<gazehound::Result<_>>().unwrap();
//! assert_eq!(rows, vec![vec!["x".to_string(), "y".to_string()]]);
//! ```

pub mod comments;
pub mod reader;

#[cfg(test)]
pub mod tests;

pub use comments::{comment_block_end, is_comment_or_blank};
pub use reader::DelimitedReader;

/// Something that can report the leading comment block of its input
///
/// The iView header extractor works against this capability rather than a
/// concrete reader type.
pub trait CommentSource {
    /// Marker that starts a comment line
    fn comment_char(&self) -> &str;

    /// Leading contiguous blank or comment lines, rescanned on every call
    fn comment_lines(&self) -> &[String];
}

//! iView header extraction
//!
//! Each comment line is read as `<comment_char>Key:\tValue`. Lines that do
//! not split into a key and a value, and keys missing from the conversion
//! table, are skipped. A value that fails to convert is an error.

use tracing::{debug, trace};

use super::header_map::lookup;
use crate::app::models::Header;
use crate::app::services::delimited_reader::CommentSource;
use crate::constants::HEADER_SEPARATOR;
use crate::{Error, Result};

/// Build the typed header from a source's leading comment block
pub fn extract_header<S: CommentSource + ?Sized>(source: &S) -> Result<Header> {
    parse_header_lines(source.comment_lines(), source.comment_char())
}

/// Build the typed header from comment lines; later duplicates win
pub fn parse_header_lines<L: AsRef<str>>(lines: &[L], comment_char: &str) -> Result<Header> {
    let mut header = Header::new();

    for line in lines {
        let line = line.as_ref();
        let Some((raw_key, raw_value)) = split_pair(line, comment_char) else {
            trace!("Skipping header line without key/value: {:?}", line);
            continue;
        };

        let Some(field) = lookup(raw_key) else {
            trace!("Ignoring unrecognised header key: {:?}", raw_key);
            continue;
        };

        let value = field
            .converter
            .convert(raw_value)
            .map_err(|e| Error::header_conversion(raw_key, raw_value, e))?;
        header.insert(field.name, value);
    }

    debug!("Extracted {} header fields", header.len());
    Ok(header)
}

/// Split `#Key:\tValue` into `("Key", "Value")`
///
/// One leading comment marker is removed. Only the first separator splits,
/// so values may themselves contain `:\t`.
fn split_pair<'a>(line: &'a str, comment_char: &str) -> Option<(&'a str, &'a str)> {
    let stripped = line.strip_prefix(comment_char).unwrap_or(line);
    let (key, value) = stripped.split_once(HEADER_SEPARATOR)?;
    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some((key, value.trim()))
}

//! Data models for iView exports
//!
//! Rows are plain field lists; the header is a small insertion-ordered
//! mapping from normalized key to typed value.

use serde::Serialize;
use std::fmt;

use crate::constants::header_names;

/// One data line split into fields
pub type Row = Vec<String>;

/// A converted header value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum HeaderValue {
    Text(String),
    Integer(i64),
    Integers(Vec<i64>),
}

impl HeaderValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            HeaderValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            HeaderValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_integers(&self) -> Option<&[i64]> {
        match self {
            HeaderValue::Integers(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for HeaderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderValue::Text(s) => write!(f, "{}", s),
            HeaderValue::Integer(n) => write!(f, "{}", n),
            HeaderValue::Integers(values) => {
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, "\t")?;
                    }
                    write!(f, "{}", value)?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for HeaderValue {
    fn from(value: &str) -> Self {
        HeaderValue::Text(value.to_string())
    }
}

impl From<i64> for HeaderValue {
    fn from(value: i64) -> Self {
        HeaderValue::Integer(value)
    }
}

impl From<Vec<i64>> for HeaderValue {
    fn from(value: Vec<i64>) -> Self {
        HeaderValue::Integers(value)
    }
}

/// Typed metadata from a file's comment block
///
/// Entries keep the order in which their key first appeared. Inserting an
/// existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Header {
    entries: Vec<(String, HeaderValue)>,
}

impl Header {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the one it replaced
    pub fn insert(&mut self, key: impl Into<String>, value: HeaderValue) -> Option<HeaderValue> {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&HeaderValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &HeaderValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(HeaderValue::as_text)
    }

    pub fn integer(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(HeaderValue::as_integer)
    }

    pub fn integers(&self, key: &str) -> Option<&[i64]> {
        self.get(key).and_then(HeaderValue::as_integers)
    }

    pub fn file_version(&self) -> Option<&str> {
        self.text(header_names::FILE_VERSION)
    }

    /// Samples per second
    pub fn sample_rate(&self) -> Option<i64> {
        self.integer(header_names::SAMPLE_RATE)
    }

    pub fn recorded_points(&self) -> Option<i64> {
        self.integer(header_names::RECORDED_POINTS)
    }

    pub fn calibration_offset(&self) -> Option<&[i64]> {
        self.integers(header_names::CALIBRATION_OFFSET)
    }

    pub fn calibration_size(&self) -> Option<&[i64]> {
        self.integers(header_names::CALIBRATION_SIZE)
    }
}

impl<K: Into<String>> FromIterator<(K, HeaderValue)> for Header {
    fn from_iter<I: IntoIterator<Item = (K, HeaderValue)>>(iter: I) -> Self {
        let mut header = Header::new();
        for (key, value) in iter {
            header.insert(key, value);
        }
        header
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_overwrites_in_place() {
        let mut header = Header::new();
        header.insert("a", HeaderValue::Integer(1));
        header.insert("b", HeaderValue::Integer(2));
        let previous = header.insert("a", HeaderValue::Integer(3));

        assert_eq!(previous, Some(HeaderValue::Integer(1)));
        assert_eq!(header.len(), 2);
        assert_eq!(header.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(header.integer("a"), Some(3));
    }

    #[test]
    fn test_typed_accessors() {
        let header: Header = vec![
            ("file_version", HeaderValue::from("1.0")),
            ("sample_rate", HeaderValue::from(60i64)),
            ("calibration_size", HeaderValue::from(vec![800, 600])),
        ]
        .into_iter()
        .collect();

        assert_eq!(header.file_version(), Some("1.0"));
        assert_eq!(header.sample_rate(), Some(60));
        assert_eq!(header.calibration_size(), Some(&[800, 600][..]));
        assert_eq!(header.calibration_offset(), None);
        // Wrong type yields None rather than a coerced value
        assert_eq!(header.text("sample_rate"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(HeaderValue::from("abc").to_string(), "abc");
        assert_eq!(HeaderValue::from(60i64).to_string(), "60");
        assert_eq!(HeaderValue::from(vec![0, 12]).to_string(), "0\t12");
    }
}

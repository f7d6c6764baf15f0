//! Conversion table for iView header keys
//!
//! Maps each raw key written by iView to the name it is exposed under and
//! the converter that types its value. Keys not in this table are ignored.

use std::num::ParseIntError;

use crate::app::models::HeaderValue;
use crate::constants::{HEADER_LIST_SEPARATOR, header_keys, header_names};

/// How a raw header value is typed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Converter {
    /// Keep the value as text
    Text,
    /// A single integer, e.g. the sample rate
    Integer,
    /// Tab-separated integers, e.g. the calibration area offset
    IntegerList,
}

impl Converter {
    /// Apply the converter to a trimmed raw value
    pub fn convert(self, raw: &str) -> std::result::Result<HeaderValue, ParseIntError> {
        match self {
            Converter::Text => Ok(HeaderValue::Text(raw.to_string())),
            Converter::Integer => raw.trim().parse::<i64>().map(HeaderValue::Integer),
            Converter::IntegerList => raw
                .split(HEADER_LIST_SEPARATOR)
                .map(|part| part.trim().parse::<i64>())
                .collect::<std::result::Result<Vec<_>, _>>()
                .map(HeaderValue::Integers),
        }
    }
}

/// One entry of the conversion table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderField {
    /// Key as written in the file, without the comment marker
    pub raw_key: &'static str,
    /// Normalized name in the resulting header
    pub name: &'static str,
    pub converter: Converter,
}

const fn field(raw_key: &'static str, name: &'static str, converter: Converter) -> HeaderField {
    HeaderField {
        raw_key,
        name,
        converter,
    }
}

static HEADER_FIELDS: [HeaderField; 9] = [
    field(header_keys::FILE_VERSION, header_names::FILE_VERSION, Converter::Text),
    field(header_keys::FILE_FORMAT, header_names::FILE_FORMAT, Converter::Text),
    field(header_keys::SUBJECT, header_names::SUBJECT, Converter::Text),
    field(header_keys::DATE, header_names::DATE_STRING, Converter::Text),
    field(header_keys::DESCRIPTION, header_names::DESCRIPTION, Converter::Text),
    field(
        header_keys::RECORDED_POINTS,
        header_names::RECORDED_POINTS,
        Converter::Integer,
    ),
    field(
        header_keys::CALIBRATION_OFFSET,
        header_names::CALIBRATION_OFFSET,
        Converter::IntegerList,
    ),
    field(
        header_keys::CALIBRATION_SIZE,
        header_names::CALIBRATION_SIZE,
        Converter::IntegerList,
    ),
    field(header_keys::SAMPLE_RATE, header_names::SAMPLE_RATE, Converter::Integer),
];

/// Every header key the iView reader recognises
pub fn header_fields() -> &'static [HeaderField] {
    &HEADER_FIELDS
}

/// Find the table entry for a raw key (exact, case-sensitive match)
pub fn lookup(raw_key: &str) -> Option<&'static HeaderField> {
    HEADER_FIELDS.iter().find(|f| f.raw_key == raw_key)
}

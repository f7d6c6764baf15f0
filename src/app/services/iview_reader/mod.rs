//! Reader for files produced by SMI's iView software
//!
//! iView exports open with a block of `#Key:\tValue` lines describing the
//! recording (subject, sample rate, calibration area, ...) followed by
//! tab-delimited sample rows. This module layers typed header extraction
//! over [`DelimitedReader`](super::delimited_reader::DelimitedReader); data
//! rows are passed through untouched.
//!
//! - [`header_map`] - The fixed table of recognised keys and their converters
//! - [`header`] - Turning comment lines into a [`Header`](crate::Header)
//! - [`reader`] - [`IViewReader`], the composed reader

pub mod header;
pub mod header_map;
pub mod reader;

#[cfg(test)]
pub mod tests;

pub use header::{extract_header, parse_header_lines};
pub use header_map::{Converter, HeaderField, header_fields, lookup};
pub use reader::IViewReader;

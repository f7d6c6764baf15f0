//! Test utilities for the delimited reader
//!
//! Shared fixtures used by the comment detection and reader tests.


/// Build an owned line vector from string literals
pub fn lines(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

/// Helper to build an expected row
pub fn row(fields: &[&str]) -> Vec<String> {
    lines(fields)
}

/// A small iView-like export: header block, blank separator, two samples
pub fn sample_export() -> Vec<String> {
    lines(&[
        "#FileVersion:\t1.0",
        "#Sample Rate:\t60",
        "",
        "x1\ty1",
        "x2\ty2",
    ])
}

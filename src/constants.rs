//! Application constants for gazehound
//!
//! Default reader settings and the raw header keys written by SMI's iView
//! software.

// =============================================================================
// Reader Defaults
// =============================================================================

/// Marker that starts a line in the leading metadata block
pub const DEFAULT_COMMENT_CHAR: &str = "#";

/// iView exports are tab-delimited
pub const DEFAULT_DELIMITER: char = '\t';

/// Quote character understood by the row splitter
pub const DEFAULT_QUOTE: char = '"';

// =============================================================================
// iView Header Format
// =============================================================================

/// Separator between a header key and its value, e.g. `#Sample Rate:\t60`
pub const HEADER_SEPARATOR: &str = ":\t";

/// Separator between the components of a multi-valued header entry
pub const HEADER_LIST_SEPARATOR: char = '\t';

/// Raw header keys as they appear in iView files
pub mod header_keys {
    pub const FILE_VERSION: &str = "FileVersion";
    pub const FILE_FORMAT: &str = "Fileformat";
    pub const SUBJECT: &str = "Subject";
    pub const DATE: &str = "Date";
    pub const DESCRIPTION: &str = "Description";
    pub const RECORDED_POINTS: &str = "# of Pts Recorded";
    pub const CALIBRATION_OFFSET: &str = "Offset Of Calibration Area";
    pub const CALIBRATION_SIZE: &str = "Size Of Calibration Area";
    pub const SAMPLE_RATE: &str = "Sample Rate";
}

/// Normalized header names produced by the iView reader
pub mod header_names {
    pub const FILE_VERSION: &str = "file_version";
    pub const FILE_FORMAT: &str = "file_format";
    pub const SUBJECT: &str = "subject";
    pub const DATE_STRING: &str = "date_string";
    pub const DESCRIPTION: &str = "description";
    pub const RECORDED_POINTS: &str = "recorded_points";
    pub const CALIBRATION_OFFSET: &str = "calibration_offset";
    pub const CALIBRATION_SIZE: &str = "calibration_size";
    pub const SAMPLE_RATE: &str = "sample_rate";
}

// =============================================================================
// Logging
// =============================================================================

/// Default log level for the command line tool
pub const DEFAULT_LOG_LEVEL: &str = "warn";

//! Loading export files into line sequences

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::{Error, Result};

/// Read a text file and split it into lines without their terminators
///
/// Both `\n` and `\r\n` endings are accepted; iView on Windows writes the latter.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)
        .map_err(|e| Error::io(format!("Failed to read '{}'", path.display()), e))?;

    let lines: Vec<String> = contents.lines().map(str::to_string).collect();
    debug!("Read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_lines_strips_terminators() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "#a\r\n#b\nx\ty\n").unwrap();

        let lines = read_lines(temp_file.path()).unwrap();
        assert_eq!(lines, vec!["#a", "#b", "x\ty"]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = read_lines(Path::new("/nonexistent/gazehound/file.txt"));
        match result {
            Err(Error::Io { message, .. }) => assert!(message.contains("/nonexistent")),
            other => panic!("expected Io error, got {:?}", other),
        }
    }
}

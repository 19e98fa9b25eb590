//! First-line extraction
//!
//! Provides consistent handling for:
//! - Unreadable files (reported as an empty line)
//! - CRLF line endings
//! - Non-UTF-8 content (lossy conversion)

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Read the first line of a file.
///
/// Returns an empty string for empty files and for any file that cannot be
/// opened or read. Errors are logged at debug level and never propagated.
pub fn read_first_line(path: &Path) -> String {
    match try_read_first_line(path) {
        Ok(line) => line,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "cannot read first line");
            String::new()
        }
    }
}

fn try_read_first_line(path: &Path) -> io::Result<String> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut buffer = Vec::new();
    reader.read_until(b'\n', &mut buffer)?;

    if buffer.last() == Some(&b'\n') {
        buffer.pop();
    }
    if buffer.last() == Some(&b'\r') {
        buffer.pop();
    }

    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

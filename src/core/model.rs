//! Document model
//!
//! Every scan produces a list of `DocumentEntry` values before rendering.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A target file and the first line of its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentEntry {
    name: String,
    first_line: String,
}

impl DocumentEntry {
    pub fn new(name: impl Into<String>, first_line: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            first_line: first_line.into(),
        }
    }

    /// File name as listed in the directory
    pub fn name(&self) -> &str {
        &self.name
    }

    /// First line of the file, empty for empty or unreadable files
    pub fn first_line(&self) -> &str {
        &self.first_line
    }
}

/// Errors that abort a scan
#[derive(Debug, Error)]
pub enum ScanError {
    /// The target directory is missing or cannot be listed
    #[error("cannot read directory {}: {source}", path.display())]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

//! Directory scanning backend
//!
//! Lists the immediate entries of one directory and keeps the target documents

use anyhow::Result;
use std::fs;
use std::path::Path;
use tracing::{debug, trace};

use crate::core::file_reader::read_first_line;
use crate::core::filter::is_target_file;
use crate::core::model::{DocumentEntry, ScanError};
use crate::core::render::{RenderConfig, Renderer};

/// Message printed when a scan finds no target files
pub const NO_FILES_MESSAGE: &str = "No .md, .txt, or .mkd files found.";

/// Collect target documents in a directory (non-recursive).
///
/// Entries are returned sorted by file name. Sub-directories and files
/// without a target extension are skipped.
pub fn collect_files(dir: &Path) -> Result<Vec<DocumentEntry>, ScanError> {
    let access_error = |source: std::io::Error| ScanError::DirectoryAccess {
        path: dir.to_path_buf(),
        source,
    };

    let mut listing = fs::read_dir(dir)
        .map_err(access_error)?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(access_error)?;
    listing.sort_by_key(|entry| entry.file_name());

    let mut entries = Vec::new();
    for entry in listing {
        let name = entry.file_name().to_string_lossy().into_owned();

        // file_type() does not follow symlinks
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        if is_dir {
            trace!(name = %name, "skipping directory");
            continue;
        }
        if !is_target_file(&name) {
            trace!(name = %name, "skipping non-target file");
            continue;
        }

        let first_line = read_first_line(&entry.path());
        entries.push(DocumentEntry::new(name, first_line));
    }

    debug!(dir = %dir.display(), count = entries.len(), "scan complete");
    Ok(entries)
}

/// Run the scan and print the rendered result
pub fn run_scan(dir: &Path, config: RenderConfig) -> Result<()> {
    let entries = collect_files(dir)?;

    if entries.is_empty() {
        println!("{}", NO_FILES_MESSAGE);
        return Ok(());
    }

    let renderer = Renderer::with_config(config);
    let stdout = std::io::stdout();
    renderer.render_to(&entries, stdout.lock())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::tempdir;

    #[test]
    fn test_collect_files() {
        let temp = tempdir().unwrap();
        let files = [
            ("readme.md", "# README"),
            ("notes.txt", "My notes"),
            ("doc.mkd", "Documentation"),
            ("main.go", "package main"),
            ("data.json", r#"{"key":"value"}"#),
        ];
        for (name, content) in files {
            fs::write(temp.path().join(name), content).unwrap();
        }
        fs::create_dir(temp.path().join("subdir")).unwrap();

        let entries = collect_files(temp.path()).unwrap();

        assert_eq!(
            entries,
            vec![
                DocumentEntry::new("doc.mkd", "Documentation"),
                DocumentEntry::new("notes.txt", "My notes"),
                DocumentEntry::new("readme.md", "# README"),
            ]
        );
    }

    #[test]
    fn test_collect_files_empty_dir() {
        let temp = tempdir().unwrap();
        let entries = collect_files(temp.path()).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_collect_files_no_targets() {
        let temp = tempdir().unwrap();
        File::create(temp.path().join("main.rs")).unwrap();
        File::create(temp.path().join("Makefile")).unwrap();

        let entries = collect_files(temp.path()).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_collect_files_nonexistent_dir() {
        let err = collect_files(Path::new("/nonexistent/directory")).unwrap_err();
        match err {
            ScanError::DirectoryAccess { path, source } => {
                assert_eq!(path, Path::new("/nonexistent/directory"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
        }
    }

    #[test]
    fn test_collect_files_path_is_a_file() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("notes.txt");
        fs::write(&file, "not a directory").unwrap();

        assert!(collect_files(&file).is_err());
    }

    #[test]
    fn test_collect_files_skips_target_named_directory() {
        let temp = tempdir().unwrap();
        fs::create_dir(temp.path().join("notes.md")).unwrap();
        fs::write(temp.path().join("real.md"), "# Real").unwrap();

        let entries = collect_files(temp.path()).unwrap();
        assert_eq!(entries, vec![DocumentEntry::new("real.md", "# Real")]);
    }

    #[test]
    fn test_collect_files_is_not_recursive() {
        let temp = tempdir().unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();
        fs::write(temp.path().join("sub/nested.md"), "# Nested").unwrap();

        let entries = collect_files(temp.path()).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_collect_files_keeps_empty_files() {
        let temp = tempdir().unwrap();
        File::create(temp.path().join("EMPTY.TXT")).unwrap();

        let entries = collect_files(temp.path()).unwrap();
        assert_eq!(entries, vec![DocumentEntry::new("EMPTY.TXT", "")]);
    }

    #[test]
    fn test_collect_files_sorted_by_name() {
        let temp = tempdir().unwrap();
        for name in ["c.md", "a.md", "b.txt"] {
            fs::write(temp.path().join(name), name).unwrap();
        }

        let names: Vec<_> = collect_files(temp.path())
            .unwrap()
            .iter()
            .map(|e| e.name().to_string())
            .collect();
        assert_eq!(names, vec!["a.md", "b.txt", "c.md"]);
    }
}

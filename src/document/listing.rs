//! Flat directory listing shared by the agent scan and the command scan.

use crate::error::ConvertError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A regular file found directly inside a scanned directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirFile {
    pub file_name: String,
    pub path: PathBuf,
}

/// List the regular files directly inside `dir`, sorted by file name.
///
/// Subdirectories are not descended into. Entries whose names are not valid
/// UTF-8 are skipped.
pub fn list_files(dir: &Path) -> Result<Vec<DirFile>, ConvertError> {
    let mut files = Vec::new();
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();
    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            ConvertError::io(path, e.into())
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(file_name) = entry.file_name().to_str() else {
            tracing::trace!(path = %entry.path().display(), "Skipping non UTF-8 file name");
            continue;
        };
        files.push(DirFile {
            file_name: file_name.to_string(),
            path: entry.path().to_path_buf(),
        });
    }
    Ok(files)
}

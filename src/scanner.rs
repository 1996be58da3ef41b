use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A file discovered during enumeration. Size is captured once and stays
/// valid for the rest of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: PathBuf,
    pub size: u64,
}

/// Walk `root` and collect every regular file, optionally filtered by
/// `suffix` (matched against the full path, so ".txt" and "txt" both work).
/// An empty suffix matches everything.
///
/// Any walk or metadata error aborts the whole scan.
pub fn scan(root: &Path, suffix: &str) -> Result<Vec<FileRecord>> {
    let mut records = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = entry.with_context(|| format!("failed to walk {}", root.display()))?;

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if !suffix.is_empty() && !path.to_string_lossy().ends_with(suffix) {
            continue;
        }

        let metadata = entry
            .metadata()
            .with_context(|| format!("failed to read metadata for {}", path.display()))?;

        records.push(FileRecord {
            path: path.to_path_buf(),
            size: metadata.len(),
        });
    }

    log::debug!(
        "scanned {} with suffix filter {:?}: {} files",
        root.display(),
        suffix,
        records.len()
    );

    Ok(records)
}

use crate::scanner::FileRecord;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeleteError {
    #[error("index {index} is out of range for {count} candidates")]
    IndexOutOfRange { index: usize, count: usize },
    #[error("failed to delete {path}: {source}")]
    Remove {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// What a deletion pass accomplished. Deletion is fail-fast, so there is at
/// most one error and `deleted` holds everything removed before it.
#[derive(Debug)]
pub struct DeleteOutcome {
    pub deleted: Vec<PathBuf>,
    pub error: Option<DeleteError>,
}

/// Remove the candidates selected by 1-based index, in the order given.
/// Indices are validated by the prompt layer, but out-of-range values are
/// still rejected here rather than read out of bounds. The first failed
/// removal stops the pass.
pub fn delete_files(candidates: &[PathBuf], indices: &[usize]) -> DeleteOutcome {
    let mut deleted = Vec::new();

    for &index in indices {
        if index < 1 || index > candidates.len() {
            return DeleteOutcome {
                deleted,
                error: Some(DeleteError::IndexOutOfRange {
                    index,
                    count: candidates.len(),
                }),
            };
        }

        let path = &candidates[index - 1];
        if let Err(source) = fs::remove_file(path) {
            return DeleteOutcome {
                deleted,
                error: Some(DeleteError::Remove {
                    path: path.clone(),
                    source,
                }),
            };
        }

        log::debug!("deleted {}", path.display());
        deleted.push(path.clone());
    }

    DeleteOutcome {
        deleted,
        error: None,
    }
}

/// Total bytes reclaimed: the sum of the original enumerated sizes of the
/// deleted paths. A deleted path missing from the enumeration counts as zero.
pub fn freed_space(records: &[FileRecord], deleted: &[PathBuf]) -> u64 {
    let sizes: HashMap<&PathBuf, u64> = records.iter().map(|r| (&r.path, r.size)).collect();
    deleted
        .iter()
        .map(|path| sizes.get(path).copied().unwrap_or(0))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn fixture(contents: &[(&str, &[u8])]) -> (tempfile::TempDir, Vec<PathBuf>, Vec<FileRecord>) {
        let dir = tempdir().unwrap();
        let mut candidates = Vec::new();
        let mut records = Vec::new();
        for (name, data) in contents {
            let path = dir.path().join(name);
            fs::write(&path, data).unwrap();
            records.push(FileRecord {
                path: path.clone(),
                size: data.len() as u64,
            });
            candidates.push(path);
        }
        (dir, candidates, records)
    }

    #[test]
    fn deletes_selected_indices_only() {
        let (_dir, candidates, records) =
            fixture(&[("a", b"aaaa"), ("b", b"bbbb"), ("c", b"cccc")]);

        let outcome = delete_files(&candidates, &[1, 3]);

        assert!(outcome.error.is_none());
        assert_eq!(outcome.deleted, vec![candidates[0].clone(), candidates[2].clone()]);
        assert!(!candidates[0].exists());
        assert!(candidates[1].exists());
        assert!(!candidates[2].exists());

        assert_eq!(freed_space(&records, &outcome.deleted), 8);
    }

    #[test]
    fn out_of_range_index_is_rejected_defensively() {
        let (_dir, candidates, _records) = fixture(&[("a", b"a"), ("b", b"b"), ("c", b"c")]);

        let outcome = delete_files(&candidates, &[5]);
        assert!(matches!(
            outcome.error,
            Some(DeleteError::IndexOutOfRange { index: 5, count: 3 })
        ));
        assert!(outcome.deleted.is_empty());
        assert!(candidates.iter().all(|p| p.exists()));

        let outcome = delete_files(&candidates, &[0]);
        assert!(matches!(
            outcome.error,
            Some(DeleteError::IndexOutOfRange { index: 0, .. })
        ));
    }

    #[test]
    fn first_failure_stops_remaining_deletions() {
        let (_dir, mut candidates, _records) = fixture(&[("a", b"a"), ("b", b"b")]);
        // Make index 2 point at a file that is already gone.
        candidates.insert(1, candidates[1].with_file_name("missing"));

        let outcome = delete_files(&candidates, &[1, 2, 3]);

        assert_eq!(outcome.deleted.len(), 1);
        assert!(matches!(outcome.error, Some(DeleteError::Remove { .. })));
        // Index 3 was never attempted.
        assert!(candidates[2].exists());
    }

    #[test]
    fn freed_space_is_zero_when_nothing_deleted() {
        let (_dir, _candidates, records) = fixture(&[("a", b"aaaa")]);
        assert_eq!(freed_space(&records, &[]), 0);
    }

    #[test]
    fn freed_space_ignores_unknown_paths() {
        let (_dir, _candidates, records) = fixture(&[("a", b"aaaa")]);
        let stranger = vec![PathBuf::from("/no/such/file")];
        assert_eq!(freed_space(&records, &stranger), 0);
    }
}

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

/// Files within one size bucket sharing the same content digest. Only groups
/// with two or more members survive resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestGroup {
    pub digest: String,
    pub paths: Vec<PathBuf>,
}

/// A size bucket that produced at least one surviving digest group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketDuplicates {
    pub size: u64,
    pub groups: Vec<DigestGroup>,
}

/// BLAKE3 digest of a file's full content, as lowercase hex.
fn fingerprint(path: &Path) -> Result<String> {
    let mut file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let mut hasher = blake3::Hasher::new();
    io::copy(&mut file, &mut hasher)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(hasher.finalize().to_hex().to_string())
}

/// Confirm duplicates by content. Every bucket with two or more files gets a
/// full-content digest per file; files are grouped by digest and singleton
/// groups are pruned. Buckets that yield no surviving group are dropped.
///
/// Digest groups are keyed lexicographically, so the displayed and indexed
/// order is reproducible across runs on the same input.
///
/// The first unreadable file aborts the whole step; no partial result is
/// returned.
pub fn resolve(
    buckets: &BTreeMap<u64, Vec<PathBuf>>,
    sorted_sizes: &[u64],
) -> Result<Vec<BucketDuplicates>> {
    let to_hash: u64 = sorted_sizes
        .iter()
        .filter_map(|size| buckets.get(size))
        .filter(|paths| paths.len() > 1)
        .map(|paths| paths.len() as u64)
        .sum();

    let bar = ProgressBar::new(to_hash);
    bar.set_style(
        ProgressStyle::with_template("{spinner} hashing {pos}/{len} files")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let result = hash_buckets(buckets, sorted_sizes, &bar);
    bar.finish_and_clear();
    result
}

fn hash_buckets(
    buckets: &BTreeMap<u64, Vec<PathBuf>>,
    sorted_sizes: &[u64],
    bar: &ProgressBar,
) -> Result<Vec<BucketDuplicates>> {
    let mut duplicates = Vec::new();

    for &size in sorted_sizes {
        let Some(paths) = buckets.get(&size) else {
            continue;
        };
        if paths.len() < 2 {
            continue;
        }

        let mut by_digest: BTreeMap<String, Vec<PathBuf>> = BTreeMap::new();
        for path in paths {
            let digest = fingerprint(path)?;
            bar.inc(1);
            by_digest.entry(digest).or_default().push(path.clone());
        }

        let groups: Vec<DigestGroup> = by_digest
            .into_iter()
            .filter(|(_, paths)| paths.len() > 1)
            .map(|(digest, paths)| DigestGroup { digest, paths })
            .collect();

        if !groups.is_empty() {
            log::debug!("size {size}: {} duplicate group(s)", groups.len());
            duplicates.push(BucketDuplicates { size, groups });
        }
    }

    Ok(duplicates)
}

/// Flatten surviving groups into the ordered candidate list. Position i
/// carries the 1-based index i+1 shown to the user; the same list is handed
/// to the deletion executor, so presentation and deletion agree.
pub fn build_candidate_list(duplicates: &[BucketDuplicates]) -> Vec<PathBuf> {
    duplicates
        .iter()
        .flat_map(|bucket| bucket.groups.iter())
        .flat_map(|group| group.paths.iter().cloned())
        .collect()
}

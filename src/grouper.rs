use crate::scanner::FileRecord;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Direction for the size listing. Descending puts the largest files first,
/// which is where deleting duplicates frees the most space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Descending,
    Ascending,
}

/// Partition files into buckets keyed by exact byte size. Every path lands in
/// exactly one bucket; order within a bucket is enumeration order. The
/// records stay borrowed because the freed-space accounting needs the
/// original path→size mapping at the end of the run.
pub fn group_by_size(records: &[FileRecord]) -> BTreeMap<u64, Vec<PathBuf>> {
    let mut buckets: BTreeMap<u64, Vec<PathBuf>> = BTreeMap::new();
    for record in records {
        buckets
            .entry(record.size)
            .or_default()
            .push(record.path.clone());
    }
    buckets
}

/// The distinct sizes in the chosen order. This ordering is shared by the
/// size report and the duplicate report, so indices presented to the user
/// line up with what they saw earlier.
pub fn sorted_sizes(buckets: &BTreeMap<u64, Vec<PathBuf>>, direction: SortDirection) -> Vec<u64> {
    match direction {
        SortDirection::Ascending => buckets.keys().copied().collect(),
        SortDirection::Descending => buckets.keys().rev().copied().collect(),
    }
}

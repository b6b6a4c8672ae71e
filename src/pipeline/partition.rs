//! Contiguous chunking and per-partition genre grouping
//!
//! The partition phase has no shared mutable state: each worker scans its
//! own index range of the record list and builds a private genre map.

use crate::dataset::MovieRecord;
use std::collections::BTreeMap;
use std::ops::Range;

/// Genre-to-records mapping built from one partition's records
pub type PartitionMap = BTreeMap<String, Vec<MovieRecord>>;

/// Split `0..total` into `workers` contiguous ranges of `total / workers`
/// records each, the final range absorbing the remainder.
///
/// When `workers > total` the leading ranges are empty; that is valid and
/// produces empty partition maps. `workers` must be non-zero (enforced by
/// configuration before this point).
pub fn chunk_ranges(total: usize, workers: usize) -> Vec<Range<usize>> {
    debug_assert!(workers > 0);
    let chunk = total / workers;
    (0..workers)
        .map(|i| {
            let start = i * chunk;
            let end = if i == workers - 1 { total } else { start + chunk };
            start..end
        })
        .collect()
}

/// Group one partition's records by genre, preserving the relative order
/// of records within a genre as encountered in the range.
pub fn group_by_genre(records: &[MovieRecord], range: Range<usize>) -> PartitionMap {
    let mut local = PartitionMap::new();
    for record in &records[range] {
        local
            .entry(record.genre.clone())
            .or_default()
            .push(record.clone());
    }
    local
}

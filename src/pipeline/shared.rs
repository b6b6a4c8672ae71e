//! Shared genre map: the merge barrier and per-genre snapshots
//!
//! One mutex guards the whole container. The merge fold holds the lock for
//! its entire duration; genre tasks hold it only long enough to copy their
//! own records out, then work on the copy lock-free. The container's
//! lifetime is scoped to a single run; there is no global state.

use super::partition::PartitionMap;
use crate::dataset::MovieRecord;
use std::collections::BTreeMap;
use std::sync::Mutex;

/// Genre-to-records container shared between the merge and genre phases
#[derive(Debug, Default)]
pub struct SharedGenreMap {
    inner: Mutex<BTreeMap<String, Vec<MovieRecord>>>,
}

impl SharedGenreMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold all partition maps in, in partition index order, under a
    /// single lock acquisition.
    ///
    /// For a genre present in several partitions, the combined sequence is
    /// the concatenation of each partition's sub-sequence in partition
    /// index order; records are never re-sorted.
    pub fn merge_partitions(&self, partitions: Vec<PartitionMap>) {
        let mut map = self.inner.lock().unwrap();
        for partition in partitions {
            for (genre, records) in partition {
                map.entry(genre).or_default().extend(records);
            }
        }
    }

    /// Distinct genre keys, sorted
    pub fn genres(&self) -> Vec<String> {
        self.inner.lock().unwrap().keys().cloned().collect()
    }

    /// Copy one genre's records out under a brief lock. Unknown genres
    /// yield an empty snapshot.
    pub fn snapshot(&self, genre: &str) -> Vec<MovieRecord> {
        self.inner
            .lock()
            .unwrap()
            .get(genre)
            .cloned()
            .unwrap_or_default()
    }

    /// Number of distinct genres merged so far
    pub fn genre_count(&self) -> usize {
        self.inner.lock().unwrap().len()
    }
}

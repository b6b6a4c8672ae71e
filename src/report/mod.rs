//! Per-genre rating-distribution reports
//!
//! A report buckets one genre's titles into fixed-width rating bands and
//! serializes as a JSON object of band label to title array.

mod band;
mod writer;

pub use band::RatingBand;
pub use writer::{JsonReportWriter, ReportError, ReportResult};

use crate::dataset::MovieRecord;
use serde::ser::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Rating-band distribution for a single genre
///
/// Band keys iterate in ascending lower-bound order with `Unrated` last;
/// within a band, titles keep the order the records arrived in.
#[derive(Debug, Clone)]
pub struct GenreReport {
    genre: String,
    bands: BTreeMap<RatingBand, Vec<String>>,
}

impl GenreReport {
    /// Bucket `records` (one genre's snapshot) into rating bands
    pub fn build(genre: impl Into<String>, records: &[MovieRecord]) -> Self {
        let mut bands: BTreeMap<RatingBand, Vec<String>> = BTreeMap::new();
        for record in records {
            bands
                .entry(RatingBand::for_rating(record.rating))
                .or_default()
                .push(record.title.clone());
        }
        Self {
            genre: genre.into(),
            bands,
        }
    }

    /// Genre this report covers
    pub fn genre(&self) -> &str {
        &self.genre
    }

    /// Band-to-titles mapping
    pub fn bands(&self) -> &BTreeMap<RatingBand, Vec<String>> {
        &self.bands
    }

    /// Name of the artifact file for this genre
    pub fn file_name(&self) -> String {
        format!("{}_rating_distribution.json", self.genre)
    }

    /// True when the snapshot held no records
    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }
}

impl Serialize for GenreReport {
    /// Serializes as the bare band map; the genre lives in the file name
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.bands.serialize(serializer)
    }
}

//! Pipeline orchestration: load, partition, merge, genre fan-out
//!
//! Two fan-out/join barriers run on the blocking thread pool. Partition
//! handles are awaited in spawn order so the merge sees partitions in
//! index order; genre tasks join in arbitrary completion order since no
//! cross-genre ordering is guaranteed.

mod partition;
mod shared;

pub use partition::{chunk_ranges, group_by_genre, PartitionMap};
pub use shared::SharedGenreMap;

use crate::config::PipelineConfig;
use crate::dataset::{self, LoadError, MovieRecord};
use crate::report::{GenreReport, JsonReportWriter};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::{self, JoinSet};
use tracing::{debug, error, info};

/// Errors that abort a pipeline run
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("load failed: {0}")]
    Load(#[from] LoadError),

    #[error("worker task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Result type for pipeline runs
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Counters describing a completed run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Records loaded from the dataset
    pub records: usize,
    /// Malformed lines dropped during loading
    pub skipped: usize,
    /// Distinct genres seen
    pub genres: usize,
    /// Report artifacts written
    pub reports_written: usize,
    /// Genres whose artifact could not be written
    pub report_failures: usize,
}

/// Runs the full load → partition → merge → report pipeline
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Execute one run to completion.
    ///
    /// A dataset with zero usable records fails here before any worker is
    /// spawned. Per-genre write failures are logged and counted in the
    /// summary but never abort the run.
    pub async fn run(&self) -> PipelineResult<RunSummary> {
        let outcome = dataset::load_dataset(&self.config.input)?;
        let skipped = outcome.skipped;
        let records = Arc::new(outcome.records);
        info!(
            "loaded {} records from {} ({} lines skipped)",
            records.len(),
            self.config.input.display(),
            skipped
        );

        let workers = self.config.effective_workers();
        let partitions = partition_phase(Arc::clone(&records), workers).await?;

        // Merge barrier: all partition contributions are folded in before
        // any genre task may read.
        let shared = Arc::new(SharedGenreMap::new());
        shared.merge_partitions(partitions);

        let genres = shared.genres();
        info!(
            "merged {} partitions into {} genres",
            workers,
            genres.len()
        );

        let writer = JsonReportWriter::new(&self.config.output_dir);
        let (reports_written, report_failures) =
            genre_phase(Arc::clone(&shared), genres.clone(), writer).await?;

        Ok(RunSummary {
            records: records.len(),
            skipped,
            genres: genres.len(),
            reports_written,
            report_failures,
        })
    }
}

/// Fan out one blocking worker per contiguous chunk and join them all.
///
/// Returns the partition maps in partition index order.
async fn partition_phase(
    records: Arc<Vec<MovieRecord>>,
    workers: usize,
) -> PipelineResult<Vec<PartitionMap>> {
    let ranges = chunk_ranges(records.len(), workers);

    let mut handles = Vec::with_capacity(ranges.len());
    for range in ranges {
        let records = Arc::clone(&records);
        handles.push(task::spawn_blocking(move || {
            group_by_genre(&records, range)
        }));
    }

    // Await in spawn order: the merge depends on partition index order.
    let mut partitions = Vec::with_capacity(handles.len());
    for handle in handles {
        partitions.push(handle.await?);
    }
    Ok(partitions)
}

/// Fan out one task per distinct genre; each snapshots its records under a
/// brief lock, bands them, and writes the artifact.
///
/// Returns `(written, failed)` counts. A failed write is scoped to its
/// genre: it is logged and counted, and its siblings are unaffected.
async fn genre_phase(
    shared: Arc<SharedGenreMap>,
    genres: Vec<String>,
    writer: JsonReportWriter,
) -> PipelineResult<(usize, usize)> {
    let mut tasks: JoinSet<bool> = JoinSet::new();

    for genre in genres {
        let shared = Arc::clone(&shared);
        let writer = writer.clone();
        tasks.spawn_blocking(move || {
            let snapshot = shared.snapshot(&genre);
            let report = GenreReport::build(&genre, &snapshot);
            match writer.write(&report) {
                Ok(path) => {
                    debug!("wrote {}", path.display());
                    true
                }
                Err(e) => {
                    error!("failed to write report for genre \"{}\": {}", genre, e);
                    false
                }
            }
        });
    }

    let mut written = 0usize;
    let mut failed = 0usize;
    while let Some(outcome) = tasks.join_next().await {
        if outcome? {
            written += 1;
        } else {
            failed += 1;
        }
    }
    Ok((written, failed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    fn dataset(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_run_counts_records_and_genres() {
        let input = dataset("Alpha|Drama|7.5\nBeta|Drama|3.2\nGamma|Comedy|9.0\n");
        let out = tempdir().unwrap();
        let config = PipelineConfig::new(input.path())
            .with_output_dir(out.path())
            .with_workers(2);

        let summary = Pipeline::new(config).run().await.unwrap();
        assert_eq!(summary.records, 3);
        assert_eq!(summary.genres, 2);
        assert_eq!(summary.reports_written, 2);
        assert_eq!(summary.report_failures, 0);
    }

    #[tokio::test]
    async fn test_run_fails_on_empty_dataset() {
        let input = dataset("");
        let out = tempdir().unwrap();
        let config = PipelineConfig::new(input.path()).with_output_dir(out.path());

        let err = Pipeline::new(config).run().await.unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Load(LoadError::NoUsableRecords { .. })
        ));
    }

    #[tokio::test]
    async fn test_partition_phase_preserves_index_order() {
        let records: Vec<MovieRecord> = (0..10)
            .map(|i| MovieRecord {
                title: format!("movie-{i}"),
                genre: "Drama".to_string(),
                rating: 5.0,
            })
            .collect();

        let partitions = partition_phase(Arc::new(records), 3).await.unwrap();
        assert_eq!(partitions.len(), 3);
        assert_eq!(partitions[0]["Drama"][0].title, "movie-0");
        assert_eq!(partitions[1]["Drama"][0].title, "movie-3");
        assert_eq!(partitions[2]["Drama"][0].title, "movie-6");
        // last partition absorbs the remainder
        assert_eq!(partitions[2]["Drama"].len(), 4);
    }
}

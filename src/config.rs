//! Run configuration

use std::path::PathBuf;
use std::thread;

/// Fallback worker count when parallelism detection is unavailable
const WORKER_FLOOR: usize = 2;

/// Configuration for one pipeline run
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Path to the `title|genre|rating` dataset
    pub input: PathBuf,
    /// Directory the per-genre report artifacts are written to
    pub output_dir: PathBuf,
    /// Partition worker count; 0 means auto-detect
    pub workers: usize,
}

impl PipelineConfig {
    /// Configuration with the default output directory (`output`) and
    /// auto-detected worker count
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_dir: PathBuf::from("output"),
            workers: 0,
        }
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Worker count actually used: the configured count when non-zero,
    /// otherwise detected parallelism with a constant floor of 2. Never
    /// returns 0; degenerate counts are corrected silently.
    pub fn effective_workers(&self) -> usize {
        if self.workers > 0 {
            return self.workers;
        }
        thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(WORKER_FLOOR)
    }
}

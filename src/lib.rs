//! Reelband: Parallel Movie Rating-Distribution Pipeline
//!
//! Loads a `|`-delimited dataset of movie records, groups them by genre
//! across a pool of workers, and writes one JSON report per genre bucketing
//! titles into fixed-width rating bands.
//!
//! # Pipeline phases
//!
//! - **Partition**: the record list is split into contiguous chunks, one per
//!   worker; each worker builds a local genre map with no shared state.
//! - **Merge**: all partition maps are folded into a [`SharedGenreMap`]
//!   under a single lock acquisition, in partition index order.
//! - **Genre fan-out**: one task per distinct genre snapshots its records
//!   from the shared map and writes `<genre>_rating_distribution.json`.
//!
//! # Example
//!
//! ```no_run
//! use reelband::{Pipeline, PipelineConfig};
//!
//! # async fn run() -> Result<(), reelband::PipelineError> {
//! let config = PipelineConfig::new("dataset/movies.txt");
//! let summary = Pipeline::new(config).run().await?;
//! println!("{} reports written", summary.reports_written);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod dataset;
pub mod pipeline;
pub mod report;

pub use config::PipelineConfig;
pub use dataset::{load_dataset, LineParseError, LoadError, LoadOutcome, MovieRecord};
pub use pipeline::{Pipeline, PipelineError, RunSummary, SharedGenreMap};
pub use report::{GenreReport, JsonReportWriter, RatingBand, ReportError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

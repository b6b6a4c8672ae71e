//! JSON report emission
//!
//! One artifact per genre under a fixed output directory, created on
//! demand. A write failure is scoped to its genre; callers log it and move
//! on.

use super::GenreReport;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while writing a report artifact
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for report writing
pub type ReportResult<T> = Result<T, ReportError>;

/// Writes genre reports as pretty-printed JSON files
#[derive(Debug, Clone)]
pub struct JsonReportWriter {
    output_dir: PathBuf,
}

impl JsonReportWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Directory the artifacts land in
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write `<genre>_rating_distribution.json`, creating the output
    /// directory if absent. Returns the path written.
    pub fn write(&self, report: &GenreReport) -> ReportResult<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;

        let path = self.output_dir.join(report.file_name());
        let mut json = serde_json::to_string_pretty(report)?;
        json.push('\n');
        fs::write(&path, json)?;

        Ok(path)
    }
}

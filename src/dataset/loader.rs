//! Line-oriented dataset loader
//!
//! Reads records in file order, skipping malformed lines with a diagnostic.
//! Per-line problems never abort the load; an unreadable file or a file
//! that yields zero usable records is terminal for the caller.

use super::record::{LineParseError, MovieRecord};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// Errors that make the whole load unusable
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("dataset {path} contains no usable records")]
    NoUsableRecords { path: PathBuf },
}

/// Result type for dataset loading
pub type LoadResult<T> = Result<T, LoadError>;

/// Outcome of a successful load
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    /// Records in file order
    pub records: Vec<MovieRecord>,
    /// Number of malformed lines dropped (blank lines are not counted)
    pub skipped: usize,
}

/// Load all records from the dataset at `path`.
///
/// Blank lines are skipped silently. Malformed lines (wrong field count or
/// unparsable rating) are logged with their line number and content, then
/// dropped. Returns [`LoadError::NoUsableRecords`] when nothing parsed.
pub fn load_dataset(path: impl AsRef<Path>) -> LoadResult<LoadOutcome> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;

        if line.is_empty() {
            continue;
        }

        match MovieRecord::parse_line(&line) {
            Ok(record) => records.push(record),
            Err(LineParseError::FieldCount { found }) => {
                warn!(
                    "malformed line {}: \"{}\" (expected 3 fields, got {}), skipping",
                    line_number, line, found
                );
                skipped += 1;
            }
            Err(LineParseError::Rating { raw }) => {
                warn!(
                    "invalid rating \"{}\" on line {}: \"{}\", skipping",
                    raw, line_number, line
                );
                skipped += 1;
            }
        }
    }

    if records.is_empty() {
        return Err(LoadError::NoUsableRecords {
            path: path.to_path_buf(),
        });
    }

    Ok(LoadOutcome { records, skipped })
}

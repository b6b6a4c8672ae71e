//! MovieRecord: one row of the dataset

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Field separator used by the dataset format
pub const FIELD_DELIMITER: char = '|';

/// Errors produced while parsing a single dataset line
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LineParseError {
    #[error("expected 3 fields, got {found}")]
    FieldCount { found: usize },

    #[error("invalid rating value \"{raw}\"")]
    Rating { raw: String },
}

/// A single movie record, immutable once parsed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    /// Movie title, free text
    pub title: String,
    /// Genre label; the grouping key for report files
    pub genre: String,
    /// Score as given in the dataset; `0.0` means unrated
    pub rating: f64,
}

impl MovieRecord {
    /// Parse one `title|genre|rating` line.
    ///
    /// The split is limited to three fields, so extra delimiters end up in
    /// the rating field and fail numeric parsing. The rating field is
    /// trimmed before parsing; anything but a complete base-10 float
    /// literal is rejected.
    pub fn parse_line(line: &str) -> Result<Self, LineParseError> {
        let mut fields = line.splitn(3, FIELD_DELIMITER);
        let (title, genre, rating_raw) = match (fields.next(), fields.next(), fields.next()) {
            (Some(title), Some(genre), Some(rating)) => (title, genre, rating),
            _ => {
                return Err(LineParseError::FieldCount {
                    found: line.split(FIELD_DELIMITER).count(),
                })
            }
        };

        let rating_raw = rating_raw.trim();
        let rating = rating_raw
            .parse::<f64>()
            .map_err(|_| LineParseError::Rating {
                raw: rating_raw.to_string(),
            })?;

        Ok(Self {
            title: title.to_string(),
            genre: genre.to_string(),
            rating,
        })
    }
}

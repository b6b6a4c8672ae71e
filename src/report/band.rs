//! RatingBand: derived bucket key for movie scores
//!
//! A scored band covers a width-2.0 window starting at the largest even
//! number at or below the rating, offset by +0.1, so the rendered bounds
//! are 1.9 apart: 7.5 falls in "6.1-8.0". A rating of exactly 0.0 goes to
//! the reserved "Unrated" band.

use serde::ser::{Serialize, Serializer};
use std::fmt;

/// Bucket key for a movie rating
///
/// Ordering is by numeric lower bound, with `Unrated` after every scored
/// band; reports rely on this for band emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RatingBand {
    /// Half-open scored window, keyed by its lower bound in tenths
    Scored { lower_tenths: i64 },
    /// Reserved band for a rating of exactly 0.0
    Unrated,
}

impl RatingBand {
    /// Derive the band for a rating. Pure: equal ratings always map to
    /// equal bands.
    pub fn for_rating(rating: f64) -> Self {
        if rating == 0.0 {
            return RatingBand::Unrated;
        }
        let lower = (rating / 2.0).floor() * 2.0;
        RatingBand::Scored {
            lower_tenths: (lower * 10.0) as i64 + 1,
        }
    }

    /// Display label, e.g. "6.1-8.0" or "Unrated"
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RatingBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatingBand::Scored { lower_tenths } => {
                let lower = *lower_tenths as f64 / 10.0;
                let upper = (*lower_tenths + 19) as f64 / 10.0;
                write!(f, "{:.1}-{:.1}", lower, upper)
            }
            RatingBand::Unrated => write!(f, "Unrated"),
        }
    }
}

impl Serialize for RatingBand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

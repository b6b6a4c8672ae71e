//! Dataset loading: movie records and the line-oriented loader
//!
//! A dataset is a plain text file with one `title|genre|rating` record per
//! line. The loader is tolerant per record and strict per run: malformed
//! lines are logged and dropped, but a dataset that yields no usable
//! records at all is an error the caller must handle.

mod loader;
mod record;

pub use loader::{load_dataset, LoadError, LoadOutcome, LoadResult};
pub use record::{LineParseError, MovieRecord, FIELD_DELIMITER};

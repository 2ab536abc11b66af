//! Value model: the three record kinds and their parsers.
//!
//! | Kind       | Source                     | Hash input            | Export key       |
//! |------------|----------------------------|-----------------------|------------------|
//! | `GeoPoint` | record file cols 1, 2      | canonical JSON bytes  | canonical JSON   |
//! | `ZipCode`  | record file col 0          | 4-byte little-endian  | integer value    |
//! | `Word`     | word file, one per line    | raw UTF-8 bytes       | the text itself  |

mod geo;
mod word;
mod zip;

pub use geo::{GeoPoint, parse_geo_points};
pub use word::{Word, parse_words};
pub use zip::{ZipCode, parse_zip_codes};

use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

/// Record-file parsing errors. Any one of these aborts the run before
/// output is written.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("row {row}: expected {expected} comma-separated fields, got {got}")]
    ShortRow {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("row {row}: invalid zip code `{value}`")]
    InvalidZip {
        row: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("row {row}: invalid {field} `{value}`")]
    InvalidCoordinate {
        row: usize,
        field: &'static str,
        value: String,
        #[source]
        source: ParseFloatError,
    },
}

//! Postal code records.

use super::RecordError;

/// A hashable zip code.
///
/// The payload keeps its full width for export; hashing sees the value
/// truncated to 32 bits via [`ZipCode::truncated`]. No range validation is
/// applied, a 5-digit US code is only the expected case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZipCode(i64);

impl ZipCode {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Untruncated value, used as the export key.
    pub fn value(self) -> i64 {
        self.0
    }

    /// Value truncated to 32 bits (two's-complement wrap). Zip codes
    /// congruent modulo 2^32 therefore hash identically.
    pub fn truncated(self) -> u32 {
        self.0 as u32
    }
}

/// Parse zip codes out of comma-separated rows, header already skipped.
/// Column 0 is the zip integer.
pub fn parse_zip_codes(rows: &[Vec<String>]) -> Result<Vec<ZipCode>, RecordError> {
    let mut zips = Vec::with_capacity(rows.len());
    for (idx, row) in rows.iter().enumerate() {
        let row_no = idx + 1;
        let Some(field) = row.first() else {
            return Err(RecordError::ShortRow {
                row: row_no,
                expected: 3,
                got: 0,
            });
        };
        let value = field.parse().map_err(|source| RecordError::InvalidZip {
            row: row_no,
            value: field.clone(),
            source,
        })?;
        zips.push(ZipCode::new(value));
    }
    Ok(zips)
}

//! Geographic coordinate records.

use super::RecordError;
use serde::Serialize;

/// A hashable latitude/longitude pair.
///
/// The serialized field order is the canonical form, `{"lat":..,"lon":..}`.
/// That text is both the hash input and the export map key, so two points
/// with identical coordinates collapse to one export entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Canonical JSON text of this point.
    pub fn canonical_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Parse geopoints out of comma-separated rows, header already skipped.
/// Column 1 is latitude, column 2 is longitude.
pub fn parse_geo_points(rows: &[Vec<String>]) -> Result<Vec<GeoPoint>, RecordError> {
    let mut geos = Vec::with_capacity(rows.len());
    for (idx, row) in rows.iter().enumerate() {
        let row_no = idx + 1;
        if row.len() < 3 {
            return Err(RecordError::ShortRow {
                row: row_no,
                expected: 3,
                got: row.len(),
            });
        }
        let lat = parse_coordinate(&row[1], "latitude", row_no)?;
        let lon = parse_coordinate(&row[2], "longitude", row_no)?;
        geos.push(GeoPoint::new(lat, lon));
    }
    Ok(geos)
}

fn parse_coordinate(field: &str, name: &'static str, row: usize) -> Result<f64, RecordError> {
    field
        .parse()
        .map_err(|source| RecordError::InvalidCoordinate {
            row,
            field: name,
            value: field.to_string(),
            source,
        })
}

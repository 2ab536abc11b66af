//! Per-run hashing orchestration.
//!
//! A tracker binds one algorithm selection to one loaded dataset and
//! produces the keyed digest maps for export. The pass is strictly
//! sequential with a single writer; there is no partial output, any
//! failure aborts the run.

mod results;

pub use results::HashResultSet;

use crate::hash::{HashAlgorithm, HashInput};
use crate::logger::ProgressLine;
use crate::record::{GeoPoint, Word, ZipCode};
use anyhow::{Context, Result};

/// Binds one algorithm to one loaded dataset.
pub struct HashTracker {
    geos: Vec<GeoPoint>,
    zips: Vec<ZipCode>,
    words: Vec<Word>,
    results: HashResultSet,
}

impl HashTracker {
    /// Take ownership of the loaded collections, with an empty result set.
    pub fn new(geos: Vec<GeoPoint>, zips: Vec<ZipCode>, words: Vec<Word>) -> Self {
        Self {
            geos,
            zips,
            words,
            results: HashResultSet::default(),
        }
    }

    /// Hash every loaded record under `algorithm`, recording one digest per
    /// record. Duplicate values of the same kind collapse to a single map
    /// entry; hashing is deterministic, so the overwrite is byte-identical.
    ///
    /// Returns `self` for chaining into [`HashTracker::export`].
    pub fn hash(mut self, algorithm: HashAlgorithm) -> Result<Self> {
        let mut progress = ProgressLine::new(&[
            ("geo", self.geos.len()),
            ("zip", self.zips.len()),
            ("word", self.words.len()),
        ]);

        for geo in &self.geos {
            let canonical = geo
                .canonical_json()
                .with_context(|| format!("failed to encode geopoint {geo:?}"))?;
            let digest = algorithm.digest(HashInput::Bytes(canonical.as_bytes()));
            self.results.record_geo(canonical, digest);
            progress.inc("geo");
        }

        for zip in &self.zips {
            let digest = algorithm.digest(HashInput::Integer(zip.truncated()));
            self.results.record_zip(zip.value(), digest);
            progress.inc("zip");
        }

        for word in &self.words {
            let digest = algorithm.digest(HashInput::Text(word.as_str()));
            self.results.record_word(word.as_str().to_owned(), digest);
            progress.inc("word");
        }

        progress.finish();
        Ok(self)
    }

    /// Serialized JSON buffer of the populated result set.
    pub fn export(&self) -> Result<Vec<u8>> {
        self.results.to_json()
    }

    /// Entry counts per kind `(geo, zip, word)` after hashing.
    pub fn counts(&self) -> (usize, usize, usize) {
        self.results.counts()
    }
}

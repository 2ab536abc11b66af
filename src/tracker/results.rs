//! Accumulated digest maps and their JSON export.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;

/// The three digest maps produced by one hashing pass.
///
/// Keys are unique by construction: duplicate input records of the same
/// value collapse to one entry. This map semantics is deliberate and the
/// export makes no key-ordering guarantee.
#[derive(Debug, Default, Serialize)]
pub struct HashResultSet {
    /// canonical geopoint JSON text -> digest
    #[serde(rename = "geo")]
    geos: HashMap<String, String>,
    /// zip integer -> digest (keys render as decimal strings in JSON)
    #[serde(rename = "zip")]
    zips: HashMap<i64, String>,
    /// word text -> digest
    #[serde(rename = "word")]
    words: HashMap<String, String>,
}

impl HashResultSet {
    pub(crate) fn record_geo(&mut self, key: String, digest: String) {
        self.geos.insert(key, digest);
    }

    pub(crate) fn record_zip(&mut self, key: i64, digest: String) {
        self.zips.insert(key, digest);
    }

    pub(crate) fn record_word(&mut self, key: String, digest: String) {
        self.words.insert(key, digest);
    }

    /// Digest recorded for a canonical geopoint text, if any.
    pub fn geo_digest(&self, key: &str) -> Option<&str> {
        self.geos.get(key).map(String::as_str)
    }

    /// Digest recorded for a zip code, if any.
    pub fn zip_digest(&self, key: i64) -> Option<&str> {
        self.zips.get(&key).map(String::as_str)
    }

    /// Digest recorded for a word, if any.
    pub fn word_digest(&self, key: &str) -> Option<&str> {
        self.words.get(key).map(String::as_str)
    }

    /// Entry counts per kind `(geo, zip, word)`.
    pub fn counts(&self) -> (usize, usize, usize) {
        (self.geos.len(), self.zips.len(), self.words.len())
    }

    /// One JSON object with exactly the `geo`, `zip` and `word` fields.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn empty_set_exports_three_empty_maps() {
        let parsed: Value =
            serde_json::from_slice(&HashResultSet::default().to_json().unwrap()).unwrap();
        assert_eq!(parsed, serde_json::json!({"geo": {}, "zip": {}, "word": {}}));
    }

    #[test]
    fn recording_the_same_key_overwrites() {
        let mut results = HashResultSet::default();
        results.record_word("cat".into(), "aaaa".into());
        results.record_word("cat".into(), "aaaa".into());
        assert_eq!(results.counts(), (0, 0, 1));
        assert_eq!(results.word_digest("cat"), Some("aaaa"));
    }

    #[test]
    fn zip_keys_serialize_as_decimal_strings() {
        let mut results = HashResultSet::default();
        results.record_zip(90210, "dead".into());
        let parsed: Value = serde_json::from_slice(&results.to_json().unwrap()).unwrap();
        assert_eq!(parsed["zip"]["90210"], "dead");
    }
}

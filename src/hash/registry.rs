//! Name to algorithm lookup.

use super::HashAlgorithm;

/// All supported algorithms, keyed by their CLI name.
const ENTRIES: &[(&str, HashAlgorithm)] = &[
    ("sha256", HashAlgorithm::Sha256),
    ("sha1", HashAlgorithm::Sha1),
    ("md5", HashAlgorithm::Md5),
    ("siphash", HashAlgorithm::SipHash),
];

/// Immutable registry of supported hash algorithms.
///
/// Constructed once at startup and passed by reference. Lookup happens
/// before any input file is opened, so an unknown name fails the run
/// without touching the filesystem.
#[derive(Debug, Clone, Copy)]
pub struct HashRegistry {
    entries: &'static [(&'static str, HashAlgorithm)],
}

impl HashRegistry {
    pub fn new() -> Self {
        Self { entries: ENTRIES }
    }

    /// Resolve an algorithm by name.
    pub fn lookup(&self, name: &str) -> Option<HashAlgorithm> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, algorithm)| *algorithm)
    }

    /// Names accepted by [`HashRegistry::lookup`], for diagnostics.
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(name, _)| *name).collect()
    }
}

impl Default for HashRegistry {
    fn default() -> Self {
        Self::new()
    }
}

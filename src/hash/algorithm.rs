//! Hash algorithm definitions and digest dispatch.

use super::HashInput;
use sha1::Sha1;
use sha2::{Digest, Sha256};
use siphasher::sip::SipHasher24;
use std::hash::Hasher;

/// SipHash key halves used by the dataset pipeline this tool replaces.
/// Not the SipHash default keying; both halves must stay exactly as-is to
/// byte-match reference output.
const SIP_KEY: (u64, u64) = (0, 2048);

/// Hash primitive applied to every record of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    /// SHA-256, 64 hex chars
    Sha256,
    /// SHA-1, 40 hex chars
    Sha1,
    /// MD5, 32 hex chars
    Md5,
    /// Keyed SipHash-2-4, 16 hex chars
    SipHash,
}

impl HashAlgorithm {
    /// Registry name for this algorithm.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
            Self::Sha1 => "sha1",
            Self::Md5 => "md5",
            Self::SipHash => "siphash",
        }
    }

    /// Lowercase hex digest of one input.
    ///
    /// Integer inputs are hashed over their 4-byte little-endian encoding;
    /// bytes and text are hashed as-is, no padding or length prefix.
    pub fn digest(self, input: HashInput<'_>) -> String {
        match input {
            HashInput::Integer(n) => self.digest_bytes(&n.to_le_bytes()),
            HashInput::Bytes(bytes) => self.digest_bytes(bytes),
            HashInput::Text(text) => self.digest_bytes(text.as_bytes()),
        }
    }

    fn digest_bytes(self, data: &[u8]) -> String {
        match self {
            Self::Sha256 => hex::encode(Sha256::digest(data)),
            Self::Sha1 => hex::encode(Sha1::digest(data)),
            Self::Md5 => format!("{:x}", md5::compute(data)),
            Self::SipHash => {
                let mut hasher = SipHasher24::new_with_keys(SIP_KEY.0, SIP_KEY.1);
                hasher.write(data);
                format!("{:016x}", hasher.finish())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [HashAlgorithm; 4] = [
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha1,
        HashAlgorithm::Md5,
        HashAlgorithm::SipHash,
    ];

    #[test]
    fn digest_lengths_match_primitives() {
        let input = HashInput::Text("hello world");
        assert_eq!(HashAlgorithm::Sha256.digest(input).len(), 64);
        assert_eq!(HashAlgorithm::Sha1.digest(input).len(), 40);
        assert_eq!(HashAlgorithm::Md5.digest(input).len(), 32);
        assert_eq!(HashAlgorithm::SipHash.digest(input).len(), 16);
    }

    #[test]
    fn known_vectors_empty_input() {
        let empty = HashInput::Text("");
        assert_eq!(
            HashAlgorithm::Sha256.digest(empty),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            HashAlgorithm::Sha1.digest(empty),
            "da39a3ee5e6b4b0d3255bfef95601890afd80709"
        );
        assert_eq!(
            HashAlgorithm::Md5.digest(empty),
            "d41d8cd98f00b204e9800998ecf8427e"
        );
        assert_eq!(HashAlgorithm::SipHash.digest(empty), "3a0485bdf0e7cd7e");
    }

    #[test]
    fn known_vectors_text() {
        assert_eq!(
            HashAlgorithm::Md5.digest(HashInput::Text("cat")),
            "d077f244def8a70e5ea758bd8352fcd8"
        );
        assert_eq!(
            HashAlgorithm::Md5.digest(HashInput::Text("dog")),
            "06d80eb0c50b49a509b49f2424e8c805"
        );
        assert_eq!(
            HashAlgorithm::Sha256.digest(HashInput::Text("hello world")),
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
        assert_eq!(
            HashAlgorithm::Sha1.digest(HashInput::Text("hello world")),
            "2aae6c35c94fcfb415dbe95f408b9ce91ee846ed"
        );
        assert_eq!(
            HashAlgorithm::SipHash.digest(HashInput::Text("hello world")),
            "a16315af4c581633"
        );
    }

    #[test]
    fn integer_input_hashes_little_endian_encoding() {
        // 90210 encodes as [0x62, 0x60, 0x01, 0x00]
        let bytes = HashInput::Bytes(&[0x62, 0x60, 0x01, 0x00]);
        for algorithm in ALL {
            assert_eq!(
                algorithm.digest(HashInput::Integer(90210)),
                algorithm.digest(bytes),
                "{} disagrees on integer encoding",
                algorithm.name()
            );
        }
        assert_eq!(
            HashAlgorithm::Sha1.digest(HashInput::Integer(90210)),
            "de6edbda8b4af4ac92c0d614e7954769afa36dc2"
        );
    }

    #[test]
    fn text_and_bytes_agree() {
        for algorithm in ALL {
            assert_eq!(
                algorithm.digest(HashInput::Text("cat")),
                algorithm.digest(HashInput::Bytes(b"cat")),
                "{} disagrees on text vs bytes",
                algorithm.name()
            );
        }
    }

    #[test]
    fn digests_are_deterministic() {
        for algorithm in ALL {
            let first = algorithm.digest(HashInput::Text("determinism"));
            let second = algorithm.digest(HashInput::Text("determinism"));
            assert_eq!(first, second);
        }
    }

    #[test]
    fn siphash_digest_is_zero_padded() {
        // The empty-input SipHash value starts with 0x3a; a value with a
        // leading zero nibble must still render at full width.
        for text in ["", "a", "b", "c", "d", "e", "f", "g"] {
            assert_eq!(
                HashAlgorithm::SipHash.digest(HashInput::Text(text)).len(),
                16
            );
        }
    }
}

//! # Hex Encoding
//!
//! Artifacts exchanged with the relayer and batch tooling carry hashes as
//! `0x`-prefixed lowercase hex strings.

use serde::{Deserialize, Deserializer, Serializer};
use thiserror::Error;

use crate::entities::Hash;

/// Errors decoding a hex hash string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    /// String is not valid hex.
    #[error("invalid hex string {input:?}: {reason}")]
    Invalid {
        /// The offending input.
        input: String,
        /// Decoder message.
        reason: String,
    },

    /// Decoded value is not 32 bytes long.
    #[error("expected 32 bytes, got {actual}")]
    WrongLength {
        /// Decoded length in bytes.
        actual: usize,
    },
}

/// Encode a hash as `0x`-prefixed lowercase hex.
pub fn encode_hash(hash: &Hash) -> String {
    format!("0x{}", hex::encode(hash))
}

/// Decode a 32-byte hash from hex, with or without the `0x` prefix.
pub fn decode_hash(input: &str) -> Result<Hash, HexError> {
    let digits = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);

    let bytes = hex::decode(digits).map_err(|e| HexError::Invalid {
        input: input.to_string(),
        reason: e.to_string(),
    })?;

    let actual = bytes.len();
    bytes
        .try_into()
        .map_err(|_| HexError::WrongLength { actual })
}

/// Serde adapter for a single hash: `#[serde(with = "shared_types::hex_hash")]`.
pub mod hex_hash {
    use super::*;

    /// Serialize as a `0x` hex string.
    pub fn serialize<S: Serializer>(hash: &Hash, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&encode_hash(hash))
    }

    /// Deserialize from a hex string.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Hash, D::Error> {
        let s = String::deserialize(deserializer)?;
        decode_hash(&s).map_err(serde::de::Error::custom)
    }
}

/// Serde adapter for a list of hashes: `#[serde(with = "shared_types::hex_hash_vec")]`.
pub mod hex_hash_vec {
    use super::*;
    use serde::ser::SerializeSeq;

    /// Serialize as an array of `0x` hex strings.
    pub fn serialize<S: Serializer>(hashes: &[Hash], serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(hashes.len()))?;
        for hash in hashes {
            seq.serialize_element(&encode_hash(hash))?;
        }
        seq.end()
    }

    /// Deserialize from an array of hex strings.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Hash>, D::Error> {
        let raw = Vec::<String>::deserialize(deserializer)?;
        raw.iter()
            .map(|s| decode_hash(s).map_err(serde::de::Error::custom))
            .collect()
    }
}

// Path: crates/types/src/codec.rs

//! Defines the canonical, deterministic binary codec for all stored state.
//!
//! This module provides simple wrappers around `parity-scale-codec` (SCALE),
//! chosen for its compact, length-prefixed, and deterministic properties. By
//! centralizing the codec logic here in the base `types` crate, we ensure
//! that all components use the exact same serialization format for state,
//! so the same claim always produces the same stored bytes.

use parity_scale_codec::{Decode, DecodeAll, Encode};

/// Encodes a value into a deterministic, canonical byte representation using
/// SCALE codec.
///
/// This function should be used for all data that is written to the state
/// substrate.
pub fn to_bytes_canonical<T: Encode>(v: &T) -> Result<Vec<u8>, String> {
    Ok(v.encode())
}

/// Decodes a value from a canonical byte representation using SCALE codec.
///
/// Fails fast on any decoding error, including trailing bytes, returning a
/// descriptive string. This is critical for preventing invalid or malformed
/// data from being processed as a stored record.
pub fn from_bytes_canonical<T: Decode>(b: &[u8]) -> Result<T, String> {
    T::decode_all(&mut &*b).map_err(|e| format!("canonical decode failed: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{AccountId, Claim};

    #[test]
    fn claim_roundtrip_preserves_all_fields() {
        let original = Claim {
            id: "claim-7".to_string(),
            proof: "9f86d081884c7d65".to_string(),
            creator: AccountId([3u8; 32]),
            data: vec![1, 2, 3, 4],
            created_at: 1_700_000_000,
        };

        let encoded = to_bytes_canonical(&original).unwrap();
        assert!(!encoded.is_empty());

        let decoded = from_bytes_canonical::<Claim>(&encoded).unwrap();
        assert_eq!(original, decoded);
    }

    #[test]
    fn decode_rejects_trailing_bytes() {
        let mut encoded = to_bytes_canonical(&42u64).unwrap();
        encoded.push(0xff);
        assert!(from_bytes_canonical::<u64>(&encoded).is_err());
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(from_bytes_canonical::<Claim>(&[0xff, 0x01]).is_err());
    }
}

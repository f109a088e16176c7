// Path: crates/types/src/app/identity.rs

//! Defines the canonical `AccountId` used to attribute claims to their
//! creators.
//!
//! The ledger never derives or verifies identities itself; the transaction
//! layer hands it fully authenticated account ids. This module only fixes
//! their representation so that every component stores and renders them the
//! same way.

use parity_scale_codec::{Decode, Encode};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A unique, stable identifier for an on-chain account, derived upstream from
/// the hash of a public key.
///
/// Represented as a 32-byte array. Remains constant even if the underlying
/// cryptographic keys are rotated.
#[derive(Encode, Decode, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Hash)]
pub struct AccountId(pub [u8; 32]);

impl AsRef<[u8]> for AccountId {
    /// Allows treating the `AccountId` as a byte slice.
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for AccountId {
    /// Allows creating an `AccountId` directly from a 32-byte array.
    fn from(hash: [u8; 32]) -> Self {
        Self(hash)
    }
}

impl core::fmt::Display for AccountId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

// The JSON form is a lowercase hex string. Claim records cross the query
// surface as JSON, so a raw byte-array rendering would leak into
// caller-visible payloads.
impl Serialize for AccountId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(self.0))
    }
}

impl<'de> Deserialize<'de> for AccountId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        let bytes = hex::decode(&s).map_err(DeError::custom)?;
        let arr: [u8; 32] = bytes
            .try_into()
            .map_err(|_| DeError::custom("account id must be exactly 32 bytes"))?;
        Ok(Self(arr))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_id_json_is_hex() {
        let id = AccountId([0xab; 32]);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", "ab".repeat(32)));

        let back: AccountId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn account_id_json_rejects_wrong_length() {
        let err = serde_json::from_str::<AccountId>("\"abcd\"");
        assert!(err.is_err());
    }
}

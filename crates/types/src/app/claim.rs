// Path: crates/types/src/app/claim.rs

//! The claim record stored by the ledger.

use crate::app::identity::AccountId;
use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// A stored record representing an asserted proof, attributed to a creator
/// account.
///
/// Two fields of a claim double as storage keys: `proof` (a content-derived
/// identifier, used when the record is first created) and `id` (the primary
/// lookup key used by later mutations). The registry keys both into the same
/// namespace; see `notary_claims::ClaimRegistry` for the addressing rules.
///
/// The `data` payload and `created_at` timestamp are opaque to the storage
/// layer and are carried through encode/decode unchanged.
#[derive(Encode, Decode, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Claim {
    /// The primary lookup key used by mutating operations.
    pub id: String,
    /// A content-derived identifier, used as the storage key at creation.
    pub proof: String,
    /// The account that created the claim.
    pub creator: AccountId,
    /// Opaque domain payload; not interpreted by this layer.
    pub data: Vec<u8>,
    /// Block timestamp (seconds) at creation; not interpreted by this layer.
    pub created_at: u64,
}

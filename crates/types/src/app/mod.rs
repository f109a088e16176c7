// Path: crates/types/src/app/mod.rs
//! Core application-level data structures.

/// The claim record stored by the ledger.
pub mod claim;
/// Data structures for on-chain identity, including the canonical AccountId.
pub mod identity;

pub use claim::Claim;
pub use identity::AccountId;

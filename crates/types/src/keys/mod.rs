// Path: crates/types/src/keys/mod.rs
//! Defines constants for well-known state keys.
//!
//! These constants provide a single source of truth for the keys used to
//! store claim data in the state manager. Using these constants prevents
//! typos and ensures consistency across modules that need to access the same
//! state entries. The literal byte values are caller-visible through query
//! paths and must not change.

/// The state key prefix for claim records. The suffix is the claim's `proof`
/// for records written at creation, or its `id` for records written by later
/// mutations.
pub const CLAIM_KEY_PREFIX: &[u8] = b"claim:";

/// The state key for the persistent count of claims ever created. Stored as
/// base-10 ASCII text of a 64-bit signed integer; absence means zero.
pub const CLAIM_COUNT_KEY: &[u8] = b"claim_count";

/// Creates the fully-qualified state key for a claim record.
///
/// # Example
/// `claim_key("9f86d081")` -> `b"claim:9f86d081"`
pub fn claim_key<S: AsRef<str>>(suffix: S) -> Vec<u8> {
    [CLAIM_KEY_PREFIX, suffix.as_ref().as_bytes()].concat()
}

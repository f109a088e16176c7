// Path: crates/types/src/error/mod.rs
//! Core error types for the notary claim ledger.

use thiserror::Error;

/// A trait for assigning a stable, machine-readable string code to an error.
pub trait ErrorCode {
    /// Returns the unique, stable string identifier for this error variant.
    fn code(&self) -> &'static str;
}

/// Errors related to the underlying ordered key-value substrate.
#[derive(Error, Debug)]
pub enum StateError {
    /// The requested key was not found in the state.
    #[error("Key not found in state")]
    KeyNotFound,
    /// An error occurred in the state backend.
    #[error("State backend error: {0}")]
    Backend(String),
    /// An error occurred while writing to the state.
    #[error("State write error: {0}")]
    WriteError(String),
    /// The provided value was invalid.
    #[error("Invalid value: {0}")]
    InvalidValue(String),
    /// An error occurred during state deserialization.
    #[error("Decode error: {0}")]
    Decode(String),
}

impl ErrorCode for StateError {
    fn code(&self) -> &'static str {
        match self {
            Self::KeyNotFound => "STATE_KEY_NOT_FOUND",
            Self::Backend(_) => "STATE_BACKEND_ERROR",
            Self::WriteError(_) => "STATE_WRITE_ERROR",
            Self::InvalidValue(_) => "STATE_INVALID_VALUE",
            Self::Decode(_) => "STATE_DECODE_ERROR",
        }
    }
}

/// Errors produced by the claim registry.
///
/// Two tiers share this enum. `Corrupt` marks invariant violations that a
/// correct writer can never produce (an unparsable counter, a stored record
/// that fails to decode during enumeration); hosts are expected to treat it
/// as unrecoverable and may halt. Every other variant is an ordinary,
/// caller-reportable failure.
#[derive(Error, Debug)]
pub enum ClaimError {
    /// No claim record exists under the requested key.
    #[error("Claim not found")]
    NotFound,
    /// A stored claim record could not be decoded.
    #[error("Claim decode error: {0}")]
    Decode(String),
    /// The store holds bytes that violate a ledger invariant.
    #[error("Claim store corruption: {0}")]
    Corrupt(String),
    /// A claim could not be encoded as JSON for a query response.
    #[error("JSON marshal error: {0}")]
    Marshal(String),
    /// The query path named a route this module does not serve.
    #[error("Unknown claim query route: {0}")]
    UnknownQuery(String),
    /// An error originating from the state substrate.
    #[error("State error: {0}")]
    State(#[from] StateError),
}

impl ErrorCode for ClaimError {
    fn code(&self) -> &'static str {
        match self {
            Self::NotFound => "CLAIM_NOT_FOUND",
            Self::Decode(_) => "CLAIM_DECODE_ERROR",
            Self::Corrupt(_) => "CLAIM_STORE_CORRUPT",
            Self::Marshal(_) => "CLAIM_MARSHAL_ERROR",
            Self::UnknownQuery(_) => "CLAIM_UNKNOWN_QUERY",
            Self::State(_) => "CLAIM_STATE_ERROR",
        }
    }
}

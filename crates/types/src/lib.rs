// Path: crates/types/src/lib.rs
#![forbid(unsafe_code)]
#![deny(missing_docs)]

//! # Notary Ledger Types
//!
//! This crate is the foundational library for the notary claim ledger,
//! containing the core data structures, error types, key constants, and the
//! canonical state codec.
//!
//! ## Architectural Role
//!
//! As the base crate, `notary-types` has minimal dependencies and is itself a
//! dependency for every other crate in the workspace. This structure prevents
//! circular dependencies and provides a stable, canonical definition for
//! shared types like `Claim`, `AccountId`, and the error enums.

/// Core application-level data structures like `Claim` and `AccountId`.
pub mod app;
/// The canonical, deterministic binary codec for consensus-critical state.
pub mod codec;
/// A unified set of all error types used across the workspace.
pub mod error;
/// Constants for well-known state keys used for accessing data in the state manager.
pub mod keys;

// Path: crates/api/src/lib.rs
#![forbid(unsafe_code)]
#![deny(missing_docs)]

//! # Notary Ledger API
//!
//! Core traits for interacting with the ordered key-value substrate the
//! claim ledger is built on. The substrate itself (storage engine,
//! durability, transactional scoping) lives behind these traits; this crate
//! only fixes the interface and the key-namespacing rules.

/// Traits and wrappers for key-value state access.
pub mod state;

// Path: crates/claims/src/lib.rs
#![forbid(unsafe_code)]
#![deny(missing_docs)]

//! # Notary Claim Registry
//!
//! Claim lifecycle operations (create, set, get, delete, exists, list, owner
//! lookup) and the persistent claim counter, layered on the `StateAccess`
//! substrate interface.
//!
//! Every operation runs inside a caller-supplied transactional state view;
//! this crate performs no I/O of its own, takes no locks, and holds no
//! state. Authorization happens upstream: the registry trusts its caller.

/// Dispatch for the query-side read routes.
pub mod query;
/// The claim registry: CRUD, counter, and enumeration.
pub mod registry;

pub use registry::ClaimRegistry;

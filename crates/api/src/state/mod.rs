// Path: crates/api/src/state/mod.rs
//! Core traits for state access.
//!
//! This module defines the interfaces the claim ledger uses to talk to its
//! ordered key-value substrate:
//! - `StateAccess`: basic key-value store operations plus ordered prefix
//!   scans.
//! - `PrefixedStore` / `ReadOnlyPrefixedStore`: wrappers that confine a
//!   `StateAccess` to a namespaced slice of the key space.

use notary_types::error::StateError;
use std::sync::Arc;

// --- Type Aliases for common state patterns ---
/// An atomically reference-counted, owned key slice.
pub type StateKey = Arc<[u8]>;
/// An atomically reference-counted, owned value slice.
pub type StateVal = Arc<[u8]>;
/// An owned key-value pair from the state, using cheap-to-clone Arcs.
pub type StateKVPair = (StateKey, StateVal);
/// A streaming iterator over key-value pairs from the state, in ascending
/// byte-lexicographic key order. It is Send-safe to be moved across threads.
/// `Sync` is omitted as iterators are stateful.
pub type StateScanIter<'a> = Box<dyn Iterator<Item = Result<StateKVPair, StateError>> + Send + 'a>;

mod accessor;
mod prefixed;

pub use accessor::*;
pub use prefixed::{PrefixedStore, ReadOnlyPrefixedStore};

// Path: crates/api/src/state/accessor.rs
//! Defines the `StateAccess` trait for key-value storage operations.

use crate::state::StateScanIter;
use notary_types::error::StateError;

/// A dyn-safe trait that provides the interface for ordered key-value
/// storage operations.
///
/// This trait erases the concrete substrate type, allowing the claim
/// registry to operate against any transactional state view without knowing
/// its implementation. Implementations must iterate `prefix_scan` results in
/// ascending byte-lexicographic key order.
pub trait StateAccess: Send + Sync {
    /// Gets a value by key. A missing key is `Ok(None)`, never an error.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StateError>;

    /// Inserts a key-value pair, overwriting any existing value.
    fn insert(&mut self, key: &[u8], value: &[u8]) -> Result<(), StateError>;

    /// Deletes a key-value pair. Deleting a missing key is a no-op.
    fn delete(&mut self, key: &[u8]) -> Result<(), StateError>;

    /// Returns whether a value is stored under `key`.
    ///
    /// The default implementation reads the value; backends that can answer
    /// existence checks without materializing the value should override it.
    fn contains(&self, key: &[u8]) -> Result<bool, StateError> {
        Ok(self.get(key)?.is_some())
    }

    /// Scans for all key-value pairs starting with the given prefix, in
    /// ascending key order. The sequence is a view taken at call time;
    /// callers must not interleave writes with an in-progress scan.
    fn prefix_scan(&self, prefix: &[u8]) -> Result<StateScanIter<'_>, StateError>;
}

// Blanket implementation to allow `StateAccess` to be used behind a `Box` trait object.
impl<T: StateAccess + ?Sized> StateAccess for Box<T> {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StateError> {
        (**self).get(key)
    }

    fn insert(&mut self, key: &[u8], value: &[u8]) -> Result<(), StateError> {
        (**self).insert(key, value)
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), StateError> {
        (**self).delete(key)
    }

    fn contains(&self, key: &[u8]) -> Result<bool, StateError> {
        (**self).contains(key)
    }

    fn prefix_scan(&self, prefix: &[u8]) -> Result<StateScanIter<'_>, StateError> {
        (**self).prefix_scan(prefix)
    }
}

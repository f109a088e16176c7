// Path: crates/api/src/state/prefixed.rs

//! State access wrappers that confine operations to a namespaced key space.

use crate::state::{StateAccess, StateScanIter};
use notary_types::error::StateError;

/// A wrapper that provides namespaced access to a `StateAccess` object.
///
/// Every key is qualified by prepending the namespace prefix before it
/// reaches the underlying store, partitioning this module's key space within
/// the shared substrate. The wrapper holds no state of its own beyond the
/// substrate handle; it is pure translation.
pub struct PrefixedStore<'a, S: ?Sized> {
    inner: &'a mut S,
    prefix: Vec<u8>,
}

impl<'a, S: StateAccess + ?Sized> PrefixedStore<'a, S> {
    /// Creates a new namespaced accessor over `inner`.
    pub fn new(inner: &'a mut S, prefix: &[u8]) -> Self {
        Self {
            inner,
            prefix: prefix.to_vec(),
        }
    }

    /// Qualifies a logical key with the namespace prefix.
    #[inline]
    fn qualify(&self, key: &[u8]) -> Vec<u8> {
        [self.prefix.as_slice(), key].concat()
    }

    /// Gets the value stored under the namespaced key, or `None`.
    pub fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StateError> {
        self.inner.get(&self.qualify(key))
    }

    /// Stores `value` under the namespaced key, overwriting any prior value.
    pub fn insert(&mut self, key: &[u8], value: &[u8]) -> Result<(), StateError> {
        self.inner.insert(&self.qualify(key), value)
    }

    /// Deletes the namespaced key. A no-op when absent.
    pub fn delete(&mut self, key: &[u8]) -> Result<(), StateError> {
        self.inner.delete(&self.qualify(key))
    }

    /// Returns whether the namespaced key is present.
    pub fn contains(&self, key: &[u8]) -> Result<bool, StateError> {
        self.inner.contains(&self.qualify(key))
    }

    /// Scans every entry under this namespace, in ascending key order.
    /// Yielded keys are fully qualified.
    pub fn scan(&self) -> Result<StateScanIter<'_>, StateError> {
        self.inner.prefix_scan(&self.prefix)
    }
}

/// A read-only counterpart of [`PrefixedStore`] wrapping an immutable
/// reference.
///
/// Used by query-side operations so that read paths do not demand mutable
/// access to the transactional state view.
pub struct ReadOnlyPrefixedStore<'a, S: ?Sized> {
    inner: &'a S,
    prefix: Vec<u8>,
}

impl<'a, S: StateAccess + ?Sized> ReadOnlyPrefixedStore<'a, S> {
    /// Creates a new read-only namespaced accessor over `inner`.
    pub fn new(inner: &'a S, prefix: &[u8]) -> Self {
        Self {
            inner,
            prefix: prefix.to_vec(),
        }
    }

    /// Qualifies a logical key (same rule as the mutable version).
    #[inline]
    fn qualify(&self, key: &[u8]) -> Vec<u8> {
        [self.prefix.as_slice(), key].concat()
    }

    /// Gets the value stored under the namespaced key, or `None`.
    pub fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StateError> {
        self.inner.get(&self.qualify(key))
    }

    /// Returns whether the namespaced key is present.
    pub fn contains(&self, key: &[u8]) -> Result<bool, StateError> {
        self.inner.contains(&self.qualify(key))
    }

    /// Scans every entry under this namespace, in ascending key order.
    /// Yielded keys are fully qualified.
    pub fn scan(&self) -> Result<StateScanIter<'_>, StateError> {
        self.inner.prefix_scan(&self.prefix)
    }
}

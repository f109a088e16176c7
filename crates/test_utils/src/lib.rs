// Path: crates/test_utils/src/lib.rs
#![forbid(unsafe_code)]

//! Shared test fixtures for the notary claim ledger.
//!
//! Provides an in-memory, ordered `StateAccess` implementation standing in
//! for the transactional state view the host supplies in production.

use notary_api::state::{StateAccess, StateScanIter};
use notary_types::error::StateError;
use std::collections::BTreeMap;
use std::sync::Arc;

/// An in-memory ordered key-value state.
///
/// Backed by a `BTreeMap` so that `prefix_scan` yields entries in the same
/// ascending byte-lexicographic order the production substrate guarantees.
#[derive(Debug, Clone, Default)]
pub struct MemoryState {
    data: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl MemoryState {
    /// Creates an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored entries, across all namespaces.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns whether the state holds no entries.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Overwrites the raw bytes under `key`, bypassing any codec. Lets tests
    /// stage malformed records to exercise corruption handling.
    pub fn put_raw(&mut self, key: &[u8], value: &[u8]) {
        self.data.insert(key.to_vec(), value.to_vec());
    }
}

impl StateAccess for MemoryState {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StateError> {
        Ok(self.data.get(key).cloned())
    }

    fn insert(&mut self, key: &[u8], value: &[u8]) -> Result<(), StateError> {
        self.data.insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), StateError> {
        self.data.remove(key);
        Ok(())
    }

    fn contains(&self, key: &[u8]) -> Result<bool, StateError> {
        Ok(self.data.contains_key(key))
    }

    fn prefix_scan(&self, prefix: &[u8]) -> Result<StateScanIter<'_>, StateError> {
        let entries: Vec<_> = self
            .data
            .range(prefix.to_vec()..)
            .take_while(|(k, _)| k.starts_with(prefix))
            .map(|(k, v)| Ok((Arc::from(k.as_slice()), Arc::from(v.as_slice()))))
            .collect();
        Ok(Box::new(entries.into_iter()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_yields_ascending_key_order() {
        let mut state = MemoryState::new();
        state.insert(b"p:b", b"2").unwrap();
        state.insert(b"p:a", b"1").unwrap();
        state.insert(b"q:z", b"9").unwrap();
        state.insert(b"p:c", b"3").unwrap();

        let keys: Vec<Vec<u8>> = state
            .prefix_scan(b"p:")
            .unwrap()
            .map(|kv| kv.unwrap().0.to_vec())
            .collect();
        assert_eq!(keys, vec![b"p:a".to_vec(), b"p:b".to_vec(), b"p:c".to_vec()]);
    }

    #[test]
    fn get_on_missing_key_is_none() {
        let state = MemoryState::new();
        assert_eq!(state.get(b"nothing").unwrap(), None);
        assert!(!state.contains(b"nothing").unwrap());
    }
}

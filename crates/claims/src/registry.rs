// Path: crates/claims/src/registry.rs

//! The claim registry: lifecycle operations and the persistent counter.

use notary_api::state::{PrefixedStore, ReadOnlyPrefixedStore, StateAccess};
use notary_types::app::{AccountId, Claim};
use notary_types::codec;
use notary_types::error::{ClaimError, StateError};
use notary_types::keys::{CLAIM_COUNT_KEY, CLAIM_KEY_PREFIX};

/// Claim lifecycle operations over a caller-supplied state view.
///
/// The registry is stateless; every method takes the transactional state
/// explicitly, so one registry value can serve any number of concurrent
/// transaction contexts.
///
/// # Addressing
///
/// Claim records live under the `claim:` namespace. [`create_claim`] keys a
/// record by its `proof` field; [`set_claim`] keys by its `id` field. Both
/// address the same namespace, so callers must be consistent about which
/// field is the canonical identifier for a given claim: a record created by
/// proof cannot later be found or overwritten by id, and vice versa.
///
/// # Counter
///
/// The count of claims ever created is stored separately under
/// `claim_count` and is not touched by any claim mutation. Callers that want
/// it to track creations must read, increment, and write it within the same
/// transaction as the `create_claim` call.
///
/// [`create_claim`]: ClaimRegistry::create_claim
/// [`set_claim`]: ClaimRegistry::set_claim
#[derive(Debug, Clone, Copy, Default)]
pub struct ClaimRegistry;

impl ClaimRegistry {
    /// Creates a registry handle.
    pub fn new() -> Self {
        Self
    }

    /// Returns the persistent count of claims created, or 0 when the counter
    /// has never been written.
    ///
    /// Counter bytes that fail to parse as a base-10 `i64` indicate store
    /// corruption and surface as [`ClaimError::Corrupt`]; a correct writer
    /// can never produce them.
    pub fn claim_count<S: StateAccess + ?Sized>(&self, state: &S) -> Result<i64, ClaimError> {
        let Some(bytes) = state.get(CLAIM_COUNT_KEY)? else {
            // Counter never written: no claims created yet.
            return Ok(0);
        };

        let text = std::str::from_utf8(&bytes)
            .map_err(|e| ClaimError::Corrupt(format!("claim count is not ASCII text: {e}")))?;
        text.parse::<i64>().map_err(|e| {
            ClaimError::Corrupt(format!("claim count {text:?} is not a base-10 integer: {e}"))
        })
    }

    /// Overwrites the claim counter with the base-10 textual encoding of
    /// `count`.
    ///
    /// No range validation is applied; negative values are structurally
    /// permitted but a caller-level misuse.
    pub fn set_claim_count<S: StateAccess + ?Sized>(
        &self,
        state: &mut S,
        count: i64,
    ) -> Result<(), ClaimError> {
        state.insert(CLAIM_COUNT_KEY, count.to_string().as_bytes())?;
        Ok(())
    }

    /// Stores `claim` under its `proof` field.
    ///
    /// Overwrites silently if a record already exists at that key; callers
    /// wanting strict create-new semantics must check [`claim_exists`]
    /// first.
    ///
    /// [`claim_exists`]: ClaimRegistry::claim_exists
    pub fn create_claim<S: StateAccess + ?Sized>(
        &self,
        state: &mut S,
        claim: &Claim,
    ) -> Result<(), ClaimError> {
        let value = codec::to_bytes_canonical(claim).map_err(StateError::InvalidValue)?;
        let mut store = PrefixedStore::new(state, CLAIM_KEY_PREFIX);
        store.insert(claim.proof.as_bytes(), &value)?;
        log::debug!("created claim under proof {}", claim.proof);
        Ok(())
    }

    /// Stores `claim` under its `id` field.
    ///
    /// Same encoding and overwrite behavior as [`create_claim`], but keyed
    /// on `id`; see the addressing note on [`ClaimRegistry`].
    ///
    /// [`create_claim`]: ClaimRegistry::create_claim
    pub fn set_claim<S: StateAccess + ?Sized>(
        &self,
        state: &mut S,
        claim: &Claim,
    ) -> Result<(), ClaimError> {
        let value = codec::to_bytes_canonical(claim).map_err(StateError::InvalidValue)?;
        let mut store = PrefixedStore::new(state, CLAIM_KEY_PREFIX);
        store.insert(claim.id.as_bytes(), &value)?;
        log::debug!("set claim under id {}", claim.id);
        Ok(())
    }

    /// Returns the claim stored under `key`.
    ///
    /// A missing record is [`ClaimError::NotFound`]; a present record whose
    /// bytes fail to decode is [`ClaimError::Decode`].
    pub fn get_claim<S: StateAccess + ?Sized>(
        &self,
        state: &S,
        key: &str,
    ) -> Result<Claim, ClaimError> {
        let store = ReadOnlyPrefixedStore::new(state, CLAIM_KEY_PREFIX);
        let bytes = store.get(key.as_bytes())?.ok_or(ClaimError::NotFound)?;
        codec::from_bytes_canonical(&bytes).map_err(ClaimError::Decode)
    }

    /// Removes the claim stored under `key`. A no-op when absent.
    pub fn delete_claim<S: StateAccess + ?Sized>(
        &self,
        state: &mut S,
        key: &str,
    ) -> Result<(), ClaimError> {
        let mut store = PrefixedStore::new(state, CLAIM_KEY_PREFIX);
        store.delete(key.as_bytes())?;
        log::debug!("deleted claim under key {key}");
        Ok(())
    }

    /// Returns whether a claim record is stored under `key`.
    pub fn claim_exists<S: StateAccess + ?Sized>(
        &self,
        state: &S,
        key: &str,
    ) -> Result<bool, ClaimError> {
        let store = ReadOnlyPrefixedStore::new(state, CLAIM_KEY_PREFIX);
        Ok(store.contains(key.as_bytes())?)
    }

    /// Returns the creator of the claim stored under `key`, best-effort.
    ///
    /// Ownership checks degrade to `None` on any failure (a missing record,
    /// a decode failure, or a substrate error) rather than propagating it.
    pub fn claim_owner<S: StateAccess + ?Sized>(&self, state: &S, key: &str) -> Option<AccountId> {
        match self.get_claim(state, key) {
            Ok(claim) => Some(claim.creator),
            Err(ClaimError::NotFound) => None,
            Err(e) => {
                log::warn!("owner lookup for claim {key} degraded to none: {e}");
                None
            }
        }
    }

    /// Returns every stored claim, in ascending byte order of storage key.
    ///
    /// The whole namespace is materialized; there is no pagination. A record
    /// that fails to decode mid-scan is [`ClaimError::Corrupt`].
    pub fn claims<S: StateAccess + ?Sized>(&self, state: &S) -> Result<Vec<Claim>, ClaimError> {
        let store = ReadOnlyPrefixedStore::new(state, CLAIM_KEY_PREFIX);
        let mut out = Vec::new();
        for entry in store.scan()? {
            let (key, value) = entry?;
            let claim: Claim = codec::from_bytes_canonical(&value).map_err(|e| {
                ClaimError::Corrupt(format!(
                    "claim record {} failed to decode: {e}",
                    String::from_utf8_lossy(&key)
                ))
            })?;
            out.push(claim);
        }
        Ok(out)
    }

    /// Returns every stored claim as a pretty-printed JSON array, for the
    /// query router.
    pub fn list_claims<S: StateAccess + ?Sized>(&self, state: &S) -> Result<Vec<u8>, ClaimError> {
        let claims = self.claims(state)?;
        serde_json::to_vec_pretty(&claims).map_err(|e| ClaimError::Marshal(e.to_string()))
    }

    /// Query-style lookup: treats `path[0]` as the claim key and returns the
    /// record as a pretty-printed JSON object.
    ///
    /// An empty path has no key to look up and is [`ClaimError::NotFound`].
    pub fn claim_by_path<S: StateAccess + ?Sized>(
        &self,
        state: &S,
        path: &[String],
    ) -> Result<Vec<u8>, ClaimError> {
        let key = path.first().ok_or(ClaimError::NotFound)?;
        let claim = self.get_claim(state, key)?;
        serde_json::to_vec_pretty(&claim).map_err(|e| ClaimError::Marshal(e.to_string()))
    }
}

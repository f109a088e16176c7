// Path: crates/claims/src/query.rs

//! Read-path dispatch for the claim module.
//!
//! The host's query router hands this module the path segments addressed to
//! it; the first segment selects the route, the rest are route arguments.
//! Transport, pagination, and response framing stay with the router.

use crate::registry::ClaimRegistry;
use notary_api::state::StateAccess;
use notary_types::error::ClaimError;

/// Route segment for enumerating all claims.
pub const QUERY_LIST_CLAIMS: &str = "list";
/// Route segment for fetching a single claim by key.
pub const QUERY_GET_CLAIM: &str = "get";

/// Dispatches a query path to the matching registry operation.
///
/// Responses are pretty-printed JSON byte payloads, opaque to the router.
/// Unrecognized routes (including an empty path) surface as
/// [`ClaimError::UnknownQuery`].
pub fn dispatch<S: StateAccess + ?Sized>(
    registry: &ClaimRegistry,
    state: &S,
    path: &[String],
) -> Result<Vec<u8>, ClaimError> {
    let (route, args) = path
        .split_first()
        .ok_or_else(|| ClaimError::UnknownQuery("<empty path>".to_string()))?;

    match route.as_str() {
        QUERY_LIST_CLAIMS => registry.list_claims(state),
        QUERY_GET_CLAIM => registry.claim_by_path(state, args),
        other => Err(ClaimError::UnknownQuery(other.to_string())),
    }
}

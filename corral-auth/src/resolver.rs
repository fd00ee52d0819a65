// SPDX-License-Identifier: MIT OR Apache-2.0

use tracing::debug;

use crate::traits::{IdentityStore, ResourceResolver};

/// Resolve a member token to an authorizable id.
///
/// Two strategies are tried in order, stopping at the first success: the
/// token as a direct id in the identity store, then the token as a path
/// relative to the request's base resource. A store error during lookup
/// counts as a miss; membership edits are best-effort and never fail on an
/// unresolvable token.
pub(crate) fn resolve_member<S, R>(
    store: &S,
    resolver: &R,
    base: &R::Resource,
    token: &str,
) -> Option<String>
where
    S: IdentityStore,
    R: ResourceResolver,
{
    match store.find_by_id(token) {
        Ok(Some(authorizable)) => return Some(authorizable.id().to_string()),
        Ok(None) => {}
        Err(err) => {
            // The token may still be resolvable as a resource.
            debug!("identity lookup for member token {} failed: {}", token, err);
        }
    }

    resolver
        .resolve(base, token)
        .and_then(|resource| resolver.authorizable_id(&resource))
}

// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reconciliation of group membership and access-control properties from
//! batches of add and delete instructions.
//!
//! Every operation follows the same contract: load the current id set,
//! apply deletions, then additions, and report `true` if and only if the
//! resulting set differs from the starting one. Only a changed set is
//! persisted, and only a failing persist is an error; unresolvable tokens
//! are skipped silently.

use std::collections::BTreeSet;

use tracing::debug;

use crate::authorizable::Authorizable;
use crate::constants::{
    DELETE_SUFFIX, GROUP_MANAGERS_PROPERTY, GROUP_RESOURCE_PREFIX, GROUP_VIEWERS_PROPERTY,
    MANAGER_PARAMETER, MANAGERS_GROUP_MEMBER_PARAMETER, MANAGERS_GROUP_PROPERTY, MEMBER_PARAMETER,
    VIEWER_PARAMETER,
};
use crate::resolver::resolve_member;
use crate::traits::{IdentityStore, PostRequest, ResourceResolver};


/// Tag carried by a [`Modification`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChangeType {
    Modified,
}

/// A record of one modified membership collection or property, consumed by
/// the change log.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Modification {
    pub change_type: ChangeType,
    pub path: String,
}

impl Modification {
    /// Record a modification of the collection or property at `path`.
    pub fn modified(path: impl Into<String>) -> Self {
        Self {
            change_type: ChangeType::Modified,
            path: path.into(),
        }
    }
}

/// Resource path of a group in the identity tree.
pub fn group_resource_path(id: &str) -> String {
    format!("{}{}", GROUP_RESOURCE_PREFIX, id)
}

/// Applies membership and property instruction batches from an inbound
/// request against authorizables, persisting through the identity store.
///
/// Stateless across requests; construct one per request from the request's
/// collaborators.
#[derive(Debug)]
pub struct Reconciler<'a, S, R> {
    store: &'a mut S,
    resolver: &'a R,
}

impl<'a, S, R> Reconciler<'a, S, R>
where
    S: IdentityStore,
    R: ResourceResolver,
{
    pub fn new(store: &'a mut S, resolver: &'a R) -> Self {
        Self { store, resolver }
    }

    /// Update group membership from the `:member` and `:member@Delete`
    /// batches.
    pub fn update_group_membership<Q>(
        &mut self,
        request: &Q,
        group: &mut Authorizable,
        changes: &mut Vec<Modification>,
    ) -> Result<bool, S::Error>
    where
        Q: PostRequest<Resource = R::Resource>,
    {
        self.update_group_membership_with(request, group, MEMBER_PARAMETER, changes)
    }

    /// Update group membership from the batches under `param_name`.
    ///
    /// Tokens are resolved first as ids, then as paths relative to the
    /// request's base resource; unresolvable tokens are skipped. A non-group
    /// authorizable is left untouched and reported unchanged. When the
    /// member set changed, the group is persisted and a [`Modification`]
    /// naming its members collection is recorded.
    pub fn update_group_membership_with<Q>(
        &mut self,
        request: &Q,
        group: &mut Authorizable,
        param_name: &str,
        changes: &mut Vec<Modification>,
    ) -> Result<bool, S::Error>
    where
        Q: PostRequest<Resource = R::Resource>,
    {
        if !group.is_group() {
            return Ok(false);
        }

        let before = group.members().clone();
        let base = request.base_resource();

        // Deletions first: an id posted in both batches ends up present.
        let delete_param = format!("{}{}", param_name, DELETE_SUFFIX);
        if let Some(tokens) = request.parameter_values(&delete_param) {
            for token in tokens {
                match resolve_member(&*self.store, self.resolver, base, token) {
                    Some(id) => {
                        group.remove_member(&id);
                    }
                    None => debug!("member token {} did not resolve, skipping delete", token),
                }
            }
        }

        if let Some(tokens) = request.parameter_values(param_name) {
            for token in tokens {
                match resolve_member(&*self.store, self.resolver, base, token) {
                    Some(id) => {
                        group.add_member(id);
                    }
                    None => debug!("member token {} did not resolve, skipping add", token),
                }
            }
        }

        if *group.members() == before {
            return Ok(false);
        }

        self.store.persist(group)?;
        changes.push(Modification::modified(format!(
            "{}/members",
            group_resource_path(group.id())
        )));
        Ok(true)
    }

    /// Reconcile the manager and viewer ACL properties of a group.
    ///
    /// Managers come from the `:manager` batches plus `extra_managers`,
    /// principals granted manager rights regardless of request content.
    /// Viewers come from the `:viewer` batches alone.
    pub fn update_ownership<Q>(
        &mut self,
        request: &Q,
        group: &mut Authorizable,
        extra_managers: &[String],
        changes: &mut Vec<Modification>,
    ) -> Result<bool, S::Error>
    where
        Q: PostRequest<Resource = R::Resource>,
    {
        let managers_changed = self.update_property(
            request,
            group,
            GROUP_MANAGERS_PROPERTY,
            MANAGER_PARAMETER,
            extra_managers,
            changes,
        )?;
        let viewers_changed = self.update_property(
            request,
            group,
            GROUP_VIEWERS_PROPERTY,
            VIEWER_PARAMETER,
            &[],
            changes,
        )?;
        Ok(managers_changed || viewers_changed)
    }

    /// Reconcile one multi-valued principal property from the batches under
    /// `param_name` plus a fixed set of extra principals.
    ///
    /// Unlike membership edits, tokens here are raw principal ids with no
    /// path fallback. The property is written back as a de-duplicated set,
    /// and only when its membership actually differs from the loaded value.
    pub fn update_property<Q>(
        &mut self,
        request: &Q,
        group: &mut Authorizable,
        property_name: &str,
        param_name: &str,
        extras: &[String],
        changes: &mut Vec<Modification>,
    ) -> Result<bool, S::Error>
    where
        Q: PostRequest<Resource = R::Resource>,
    {
        let before: BTreeSet<String> = group
            .property_values(property_name)
            .map(|values| values.iter().cloned().collect())
            .unwrap_or_default();
        let mut principals = before.clone();

        let delete_param = format!("{}{}", param_name, DELETE_SUFFIX);
        if let Some(tokens) = request.parameter_values(&delete_param) {
            for token in tokens {
                principals.remove(token.as_str());
            }
        }

        if let Some(tokens) = request.parameter_values(param_name) {
            for token in tokens {
                principals.insert(token.clone());
            }
        }

        for extra in extras {
            principals.insert(extra.clone());
        }

        if principals == before {
            return Ok(false);
        }

        group.set_property(property_name, principals.into_iter().collect());
        self.store.persist(group)?;
        changes.push(Modification::modified(format!(
            "{}/{}",
            group_resource_path(group.id()),
            property_name
        )));
        Ok(true)
    }

    /// Mirror membership edits onto the group's linked managers group.
    ///
    /// Reads the linked group id from the `corral:managers-group` property
    /// and reconciles that group's membership from the reserved
    /// `:corral:manager` batches. A caller may hold rights on the group
    /// without any on its managers group, so an id that does not resolve is
    /// skipped rather than reported.
    pub fn update_managers_group<Q>(
        &mut self,
        request: &Q,
        group: &Authorizable,
        changes: &mut Vec<Modification>,
    ) -> Result<bool, S::Error>
    where
        Q: PostRequest<Resource = R::Resource>,
    {
        let Some(managers_group_id) = group.first_property_value(MANAGERS_GROUP_PROPERTY) else {
            return Ok(false);
        };

        let mut managers_group = match self.store.find_by_id(managers_group_id) {
            Ok(Some(authorizable)) => authorizable,
            Ok(None) => {
                debug!("managers group {} not visible, skipping", managers_group_id);
                return Ok(false);
            }
            Err(err) => {
                debug!(
                    "managers group {} lookup failed, skipping: {}",
                    managers_group_id, err
                );
                return Ok(false);
            }
        };

        self.update_group_membership_with(
            request,
            &mut managers_group,
            MANAGERS_GROUP_MEMBER_PARAMETER,
            changes,
        )
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::{BTreeSet, HashMap};

/// An entity in the identity store: a single user or a group.
///
/// Every authorizable has a unique string id and zero or more named
/// multi-valued string properties. Groups additionally own a member set
/// holding the ids of their members. Readers of a property or of the member
/// set get set semantics only; no ordering is guaranteed.
///
/// Authorizables are mutated in memory and written back as a whole through
/// [`IdentityStore::persist`](crate::traits::IdentityStore::persist).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Authorizable {
    id: String,
    group: bool,
    members: BTreeSet<String>,
    properties: HashMap<String, Vec<String>>,
}

impl Authorizable {
    /// A new user with no properties.
    pub fn user(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            group: false,
            members: BTreeSet::new(),
            properties: HashMap::new(),
        }
    }

    /// A new group with no members and no properties.
    pub fn group(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            group: true,
            members: BTreeSet::new(),
            properties: HashMap::new(),
        }
    }

    /// Add a member id; builder form for constructing test and seed data.
    pub fn with_member(mut self, id: impl Into<String>) -> Self {
        self.members.insert(id.into());
        self
    }

    /// Set a property; builder form for constructing test and seed data.
    pub fn with_property(mut self, name: impl Into<String>, values: Vec<String>) -> Self {
        self.properties.insert(name.into(), values);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_group(&self) -> bool {
        self.group
    }

    /// Current member set. Meaningful for groups only; always empty for
    /// users.
    pub fn members(&self) -> &BTreeSet<String> {
        &self.members
    }

    /// Insert a member id. Returns `false` when the id was already a member.
    pub fn add_member(&mut self, id: impl Into<String>) -> bool {
        self.members.insert(id.into())
    }

    /// Remove a member id. Returns `false` when the id was not a member.
    pub fn remove_member(&mut self, id: &str) -> bool {
        self.members.remove(id)
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// All values of a multi-valued property, `None` when the property is
    /// absent.
    pub fn property_values(&self, name: &str) -> Option<&[String]> {
        self.properties.get(name).map(Vec::as_slice)
    }

    /// Single-valued read: the first value of a property.
    pub fn first_property_value(&self, name: &str) -> Option<&str> {
        self.properties
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Replace the full value of a property.
    pub fn set_property(&mut self, name: impl Into<String>, values: Vec<String>) {
        self.properties.insert(name.into(), values);
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::HashMap;

use thiserror::Error;

use crate::authorizable::Authorizable;
use crate::traits::IdentityStore;

/// Errors returned by [`MemoryIdentityStore`]. The store is infallible; the
/// type exists to satisfy the trait contract.
#[derive(Debug, Error)]
pub enum MemoryStoreError {}

/// HashMap-backed identity store.
#[derive(Debug, Default)]
pub struct MemoryIdentityStore {
    authorizables: HashMap<String, Authorizable>,
}

impl MemoryIdentityStore {
    pub fn new() -> Self {
        Self {
            authorizables: HashMap::new(),
        }
    }

    /// Seed the store with an authorizable, replacing any previous state
    /// under the same id.
    pub fn insert(&mut self, authorizable: Authorizable) {
        self.authorizables
            .insert(authorizable.id().to_string(), authorizable);
    }

    pub fn get(&self, id: &str) -> Option<&Authorizable> {
        self.authorizables.get(id)
    }
}

impl IdentityStore for MemoryIdentityStore {
    type Error = MemoryStoreError;

    fn find_by_id(&self, id: &str) -> Result<Option<Authorizable>, Self::Error> {
        Ok(self.authorizables.get(id).cloned())
    }

    fn persist(&mut self, authorizable: &Authorizable) -> Result<(), Self::Error> {
        self.authorizables
            .insert(authorizable.id().to_string(), authorizable.clone());
        Ok(())
    }
}

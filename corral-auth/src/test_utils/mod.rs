// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory collaborator implementations for tests.

use std::collections::HashMap;

use thiserror::Error;

use crate::authorizable::Authorizable;
use crate::memory::MemoryIdentityStore;
use crate::traits::{IdentityStore, PostRequest, ResourceResolver};

/// Resolver over a fixed routing table from resource paths to authorizable
/// ids. Resources are plain path strings.
#[derive(Debug, Default)]
pub struct TestResolver {
    routes: HashMap<String, String>,
}

impl TestResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a path resolving to an authorizable id.
    pub fn route(mut self, path: impl Into<String>, id: impl Into<String>) -> Self {
        self.routes.insert(path.into(), id.into());
        self
    }
}

impl ResourceResolver for TestResolver {
    type Resource = String;

    fn resolve(&self, base: &String, token: &str) -> Option<String> {
        let path = format!("{}/{}", base, token);
        self.routes.contains_key(&path).then_some(path)
    }

    fn authorizable_id(&self, resource: &String) -> Option<String> {
        self.routes.get(resource).cloned()
    }
}

/// Request double carrying a base resource path and a parameter map.
#[derive(Debug)]
pub struct TestRequest {
    base: String,
    parameters: HashMap<String, Vec<String>>,
}

impl TestRequest {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            parameters: HashMap::new(),
        }
    }

    pub fn parameter(mut self, name: &str, values: &[&str]) -> Self {
        self.parameters.insert(
            name.to_string(),
            values.iter().map(|value| value.to_string()).collect(),
        );
        self
    }
}

impl PostRequest for TestRequest {
    type Resource = String;

    fn parameter_values(&self, name: &str) -> Option<&[String]> {
        self.parameters.get(name).map(Vec::as_slice)
    }

    fn base_resource(&self) -> &String {
        &self.base
    }
}

#[derive(Debug, Error)]
pub enum UnreliableStoreError {
    #[error("lookup failed")]
    Lookup,

    #[error("persist failed")]
    Persist,
}

/// Identity store wrapper which can be made to fail lookups or persists.
#[derive(Debug, Default)]
pub struct UnreliableIdentityStore {
    pub inner: MemoryIdentityStore,
    pub fail_lookups: bool,
    pub fail_persists: bool,
}

impl IdentityStore for UnreliableIdentityStore {
    type Error = UnreliableStoreError;

    fn find_by_id(&self, id: &str) -> Result<Option<Authorizable>, Self::Error> {
        if self.fail_lookups {
            return Err(UnreliableStoreError::Lookup);
        }
        Ok(self.inner.get(id).cloned())
    }

    fn persist(&mut self, authorizable: &Authorizable) -> Result<(), Self::Error> {
        if self.fail_persists {
            return Err(UnreliableStoreError::Persist);
        }
        self.inner.insert(authorizable.clone());
        Ok(())
    }
}

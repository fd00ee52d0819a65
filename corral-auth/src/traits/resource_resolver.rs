// SPDX-License-Identifier: MIT OR Apache-2.0

/// Interface to the layer mapping request paths onto resources.
pub trait ResourceResolver {
    type Resource;

    /// Resolve a token as a path relative to a base resource.
    fn resolve(&self, base: &Self::Resource, token: &str) -> Option<Self::Resource>;

    /// Adapt a resource to the id of the authorizable it represents, when it
    /// represents one.
    fn authorizable_id(&self, resource: &Self::Resource) -> Option<String>;
}

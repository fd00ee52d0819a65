// SPDX-License-Identifier: MIT OR Apache-2.0

//! Group membership and access-control reconciliation for corral
//! repositories.
//!
//! Groups carry an unordered set of member ids plus named multi-valued
//! properties holding the principals allowed to manage or view them. Inbound
//! requests describe edits as batches of add and delete instructions
//! (`:member` adds, `:member@Delete` removes, and so on for `:manager` and
//! `:viewer`). The [`Reconciler`] applies such a batch against the current
//! state and reports whether anything actually changed, recording one
//! [`Modification`] per altered collection or property.
//!
//! Member tokens are resolved best-effort: first as a direct id in the
//! identity store, then as a path relative to the request's base resource.
//! Tokens which resolve to nothing are dropped silently; only a failure to
//! persist the final computed state is surfaced to the caller.
//!
//! The identity store, resource resolution and request parameter access are
//! collaborator seams defined in [`traits`]; a HashMap-backed
//! [`MemoryIdentityStore`] is provided for tests and small deployments.

mod authorizable;
pub mod constants;
mod memory;
pub mod reconcile;
mod resolver;
#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
pub mod traits;

pub use authorizable::Authorizable;
pub use memory::{MemoryIdentityStore, MemoryStoreError};
pub use reconcile::{ChangeType, Modification, Reconciler, group_resource_path};

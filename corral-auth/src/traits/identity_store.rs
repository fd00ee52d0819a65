// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt::{Debug, Display};

use crate::authorizable::Authorizable;

/// Interface for querying and persisting authorizable entities.
pub trait IdentityStore {
    type Error: Display + Debug;

    /// Look an authorizable up by its unique id.
    fn find_by_id(&self, id: &str) -> Result<Option<Authorizable>, Self::Error>;

    /// Write the full state of an authorizable back to the store.
    ///
    /// The write must be atomic per entity; concurrent writers racing on the
    /// same entity are the store's concern and surface here as an error
    /// rather than as a silently lost write.
    fn persist(&mut self, authorizable: &Authorizable) -> Result<(), Self::Error>;
}

// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire and property name constants.
//!
//! The parameter names and the `@Delete` suffix are the wire contract with
//! calling clients and must not change.

/// Prefix marking operation parameters, as opposed to content properties.
pub const PARAMETER_PREFIX: &str = ":";

/// Suffix marking the delete batch of a parameter, e.g. `:member@Delete`.
pub const DELETE_SUFFIX: &str = "@Delete";

/// Parameter carrying member ids or paths to add to a group.
pub const MEMBER_PARAMETER: &str = ":member";

/// Parameter carrying principal ids to grant manager rights.
pub const MANAGER_PARAMETER: &str = ":manager";

/// Parameter carrying principal ids to grant viewer rights.
pub const VIEWER_PARAMETER: &str = ":viewer";

/// Parameter reserved for edits mirrored onto a group's linked managers
/// group, kept distinct so it cannot collide with [`MEMBER_PARAMETER`].
pub const MANAGERS_GROUP_MEMBER_PARAMETER: &str = ":corral:manager";

/// Multi-valued property holding the principals allowed to manage a group.
pub const GROUP_MANAGERS_PROPERTY: &str = "corral:managers";

/// Multi-valued property holding the principals allowed to view a group.
pub const GROUP_VIEWERS_PROPERTY: &str = "corral:viewers";

/// Single-valued property naming the internal group whose members manage
/// this one.
pub const MANAGERS_GROUP_PROPERTY: &str = "corral:managers-group";

/// Resource tree prefix under which groups are addressed.
pub const GROUP_RESOURCE_PREFIX: &str = "/system/identity/group/";

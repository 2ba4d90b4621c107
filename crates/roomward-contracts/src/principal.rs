//! Requesting principal and permission types.
//!
//! Permissions follow a grant-at-startup model: the hosting application
//! resolves a principal's permissions before asking for an access
//! decision, and nothing in this workspace elevates them at runtime.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::room::DepartmentId;

/// Stable, opaque identifier for a user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl UserId {
    /// Construct a user id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

/// An opaque permission token.
///
/// Permission names are the hosting application's vocabulary, e.g.
/// "view-livechat-rooms", "view-livechat-department-rooms".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Permission(pub String);

impl Permission {
    /// Construct a permission from any string-like value.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

/// The full set of permissions granted to a principal.
///
/// Built by the hosting application before the check and passed in as part
/// of the `Principal`; validators only ever query it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PermissionSet {
    inner: HashSet<Permission>,
}

impl PermissionSet {
    /// Grant a permission to this set.
    pub fn grant(&mut self, permission: Permission) {
        self.inner.insert(permission);
    }

    /// Return true if the set contains the given permission.
    pub fn has(&self, permission: &Permission) -> bool {
        self.inner.contains(permission)
    }

    /// Return an iterator over all granted permissions.
    pub fn all(&self) -> impl Iterator<Item = &Permission> {
        self.inner.iter()
    }
}

/// The actor requesting access to a room.
///
/// Optional on every check: an absent principal represents an anonymous or
/// system-originated check and must be treated by validators as "no
/// additional evidence", never as an implicit grant or deny.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Principal {
    /// Who is asking.
    pub id: UserId,
    /// Permissions the hosting application resolved for this actor.
    pub permissions: PermissionSet,
    /// Departments this actor is a member of.
    pub departments: Vec<DepartmentId>,
}

impl Principal {
    /// Build a principal with no permissions and no department memberships.
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            permissions: PermissionSet::default(),
            departments: vec![],
        }
    }

    /// Build a principal holding the given permissions.
    pub fn with_permissions<I>(id: UserId, permissions: I) -> Self
    where
        I: IntoIterator<Item = Permission>,
    {
        let mut set = PermissionSet::default();
        for p in permissions {
            set.grant(p);
        }
        Self {
            id,
            permissions: set,
            departments: vec![],
        }
    }
}

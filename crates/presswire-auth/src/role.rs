//! Staff role hierarchy.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// User role for authorization.
///
/// Ordered by rank: customer < editor < admin < super_admin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Regular buyer.
    #[default]
    Customer,
    /// Content editor managing press-release drafts.
    Editor,
    /// Administrator managing the catalog and clients.
    Admin,
    /// Super admin with full access, including role management.
    SuperAdmin,
}

impl Role {
    /// Get role as string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Editor => "editor",
            Role::Admin => "admin",
            Role::SuperAdmin => "super_admin",
        }
    }

    /// Get permission rank (higher = more permissions).
    pub fn rank(&self) -> u8 {
        match self {
            Role::Customer => 0,
            Role::Editor => 1,
            Role::Admin => 2,
            Role::SuperAdmin => 3,
        }
    }

    /// Check if this role has at least the given permission level.
    pub fn has_permission(&self, required: Role) -> bool {
        self.rank() >= required.rank()
    }

    /// Check whether a holder of this role may assign `target` to a user.
    ///
    /// Role management requires at least admin, and nobody may grant a role
    /// above their own rank, so escalation past the actor is impossible.
    pub fn can_assign(&self, target: Role) -> bool {
        self.has_permission(Role::Admin) && target.rank() <= self.rank()
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Role::Customer),
            "editor" => Ok(Role::Editor),
            "admin" => Ok(Role::Admin),
            "super_admin" => Ok(Role::SuperAdmin),
            _ => Err(()),
        }
    }
}

//! Viewer identity.

use crate::role::Role;
use crate::session::SessionId;
use presswire_commerce::catalog::Visibility;
use presswire_commerce::ids::UserId;
use serde::{Deserialize, Serialize};

/// The current viewer of the site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Viewer {
    /// Anonymous/guest visitor with session tracking.
    Anonymous {
        /// Session identifier.
        session_id: SessionId,
    },
    /// Signed-in user.
    Authenticated {
        /// User ID.
        id: UserId,
        /// Email address.
        email: String,
        /// Display name.
        name: Option<String>,
        /// Roles held by the user.
        roles: Vec<Role>,
    },
}

impl Viewer {
    /// Create a new anonymous viewer.
    pub fn anonymous(session_id: impl Into<SessionId>) -> Self {
        Viewer::Anonymous {
            session_id: session_id.into(),
        }
    }

    /// Create a signed-in viewer.
    pub fn authenticated(
        id: UserId,
        email: impl Into<String>,
        name: Option<String>,
        roles: Vec<Role>,
    ) -> Self {
        Viewer::Authenticated {
            id,
            email: email.into(),
            name,
            roles,
        }
    }

    /// Check if the viewer is signed in.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Viewer::Authenticated { .. })
    }

    /// Which catalog projection this viewer receives.
    pub fn visibility(&self) -> Visibility {
        Visibility::for_authenticated(self.is_authenticated())
    }

    /// Get user ID if signed in.
    pub fn user_id(&self) -> Option<&UserId> {
        match self {
            Viewer::Authenticated { id, .. } => Some(id),
            Viewer::Anonymous { .. } => None,
        }
    }

    /// Get email if signed in.
    pub fn email(&self) -> Option<&str> {
        match self {
            Viewer::Authenticated { email, .. } => Some(email),
            Viewer::Anonymous { .. } => None,
        }
    }

    /// Get roles held.
    pub fn roles(&self) -> &[Role] {
        match self {
            Viewer::Authenticated { roles, .. } => roles,
            Viewer::Anonymous { .. } => &[],
        }
    }

    /// Check if the viewer holds at least the given permission level.
    pub fn has_permission(&self, required: Role) -> bool {
        self.roles().iter().any(|r| r.has_permission(required))
    }

    /// Highest-ranked role held, if any.
    pub fn top_role(&self) -> Option<Role> {
        self.roles().iter().copied().max_by_key(|r| r.rank())
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Viewer::Anonymous {
            session_id: SessionId::generate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_viewer() {
        let viewer = Viewer::anonymous("sess-1");
        assert!(!viewer.is_authenticated());
        assert!(viewer.user_id().is_none());
        assert_eq!(viewer.visibility(), Visibility::Public);
        assert!(viewer.roles().is_empty());
    }

    #[test]
    fn test_authenticated_viewer() {
        let viewer = Viewer::authenticated(
            UserId::new("user-1"),
            "buyer@example.com",
            Some("Buyer".to_string()),
            vec![Role::Customer],
        );
        assert!(viewer.is_authenticated());
        assert_eq!(viewer.visibility(), Visibility::Full);
        assert_eq!(viewer.email(), Some("buyer@example.com"));
    }

    #[test]
    fn test_viewer_permissions() {
        let editor = Viewer::authenticated(
            UserId::new("user-2"),
            "editor@example.com",
            None,
            vec![Role::Editor],
        );
        assert!(editor.has_permission(Role::Customer));
        assert!(!editor.has_permission(Role::Admin));
        assert_eq!(editor.top_role(), Some(Role::Editor));
    }
}

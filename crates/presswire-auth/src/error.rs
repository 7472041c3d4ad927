//! Auth error types.

use crate::role::Role;
use thiserror::Error;

/// Errors that can occur in authorization checks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The actor may not assign the requested role.
    #[error("{} may not assign role {}", .actor.as_str(), .requested.as_str())]
    RoleAssignmentDenied {
        /// Highest role held by the actor.
        actor: Role,
        /// Role the actor tried to assign.
        requested: Role,
    },

    /// The operation requires a signed-in viewer.
    #[error("Not signed in")]
    NotAuthenticated,

    /// Unknown role label from the backing store.
    #[error("Unknown role: {0}")]
    UnknownRole(String),
}

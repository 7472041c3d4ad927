//! Viewer identity and authorization for Presswire.
//!
//! Identity itself (sign-up, passwords, tokens) is owned by the managed
//! identity provider. This crate models what the application needs locally:
//! who the current viewer is, the staff role hierarchy, and the pure
//! role-assignment check admin dashboards consult before changing a role.

mod error;
mod role;
mod session;
mod viewer;

pub use error::AuthError;
pub use role::Role;
pub use session::SessionId;
pub use viewer::Viewer;

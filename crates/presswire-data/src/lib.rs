//! Outbound collaborator clients for Presswire.
//!
//! Everything intelligent lives behind hosted third-party APIs; this crate
//! holds the thin request/response clients the application calls:
//!
//! - [`BrandLookup`]: best-effort logo discovery with a deterministic
//!   favicon fallback
//! - [`SalesAssistant`]: one-shot conversational replies with optional
//!   publication recommendations

mod assistant;
mod brand;
mod error;

pub use assistant::{AssistantReply, ChatTurn, SalesAssistant, Speaker};
pub use brand::BrandLookup;
pub use error::FetchError;

//! Selection cart module.
//!
//! Tracks which publications and add-on services the current visitor has
//! chosen. Session-scoped and in-memory; the cart serializes, but no crate
//! persists it across sessions.

mod handle;
mod selection;

pub use handle::CartHandle;
pub use selection::SelectionCart;

//! Catalog store seam for Presswire.
//!
//! All durable state lives in a managed data platform; this crate is the
//! thin read/write seam the application talks to. It provides:
//!
//! - [`CatalogStore`]: the async trait the rest of the workspace depends on
//! - [`RestCatalog`]: the REST client for the managed platform
//! - [`InMemoryCatalog`]: a reference backend for tests and local work
//! - [`CatalogReader`]: the visibility-filtered catalog read path
//! - [`CachedCatalog`]: push-invalidated snapshot of the projected catalog
//! - [`import_sheet`]: row-by-row rate-sheet import against any store

mod catalog;
mod error;
mod feed;
mod import;
mod memory;
mod reader;
mod rest;

pub use catalog::{CatalogStore, ChangeEvent, UpsertOutcome};
pub use error::StoreError;
pub use feed::CachedCatalog;
pub use import::import_sheet;
pub use memory::InMemoryCatalog;
pub use reader::CatalogReader;
pub use rest::RestCatalog;

//! The visibility-filtered catalog read path.

use crate::catalog::CatalogStore;
use presswire_commerce::catalog::{CatalogView, Visibility};
use std::sync::Arc;

/// Reads the active catalog and projects it for a caller.
///
/// The reader fails open: a backend error is logged and served as an empty
/// catalog, never propagated. The UI owns the empty-state rendering either
/// way, so a degraded backend degrades to "no listings" rather than a crash.
pub struct CatalogReader<S> {
    store: Arc<S>,
}

impl<S> Clone for CatalogReader<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: CatalogStore> CatalogReader<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Fetch the active catalog, ranked by descending popularity, projected
    /// for the given visibility.
    pub async fn fetch_catalog(&self, visibility: Visibility) -> Vec<CatalogView> {
        match self.store.active_by_popularity().await {
            Ok(mut publications) => {
                // The store contract already filters and orders; re-apply
                // both so a sloppy backend cannot leak inactive rows or
                // scramble the ranking. The sort is stable, so equal
                // popularity keeps the backend's order.
                publications.retain(|p| p.is_active);
                publications.sort_by_key(|p| std::cmp::Reverse(p.popularity));
                publications
                    .iter()
                    .map(|p| CatalogView::project(p, visibility))
                    .collect()
            }
            Err(e) => {
                tracing::warn!(error = %e, "catalog fetch failed, serving empty catalog");
                Vec::new()
            }
        }
    }
}

//! Push-invalidated catalog snapshot.
//!
//! Holds the latest projected catalog and refetches the whole thing whenever
//! the store reports any change. There is no partial reconciliation and no
//! ordering guarantee between a local write and the arrival of its event;
//! the snapshot is eventually consistent with the store.

use crate::catalog::CatalogStore;
use crate::reader::CatalogReader;
use presswire_commerce::catalog::{CatalogView, Visibility};
use std::sync::{Arc, RwLock};
use tokio::sync::broadcast::error::RecvError;

/// A cached, change-fed view of the catalog for one visibility level.
pub struct CachedCatalog<S> {
    store: Arc<S>,
    reader: CatalogReader<S>,
    visibility: Visibility,
    current: RwLock<Vec<CatalogView>>,
}

impl<S: CatalogStore> CachedCatalog<S> {
    /// Create an empty cache; call [`refresh`](Self::refresh) to fill it.
    pub fn new(store: Arc<S>, visibility: Visibility) -> Self {
        Self {
            reader: CatalogReader::new(Arc::clone(&store)),
            store,
            visibility,
            current: RwLock::new(Vec::new()),
        }
    }

    /// The latest snapshot.
    pub fn snapshot(&self) -> Vec<CatalogView> {
        self.current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Refetch the catalog and replace the snapshot.
    pub async fn refresh(&self) {
        let views = self.reader.fetch_catalog(self.visibility).await;
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        *guard = views;
    }

    /// Consume change events until the store's feed closes.
    ///
    /// Every event, of any kind, triggers a full refetch. A lagged receiver
    /// just refetches too; events carry no state worth replaying.
    pub async fn run(&self) {
        let mut rx = self.store.subscribe();
        loop {
            match rx.recv().await {
                Ok(_) | Err(RecvError::Lagged(_)) => self.refresh().await,
                Err(RecvError::Closed) => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryCatalog;
    use presswire_commerce::catalog::PublicationDraft;
    use presswire_commerce::money::{Currency, Money};

    #[tokio::test]
    async fn test_snapshot_follows_refresh() {
        let store = Arc::new(InMemoryCatalog::new());
        let cache = CachedCatalog::new(Arc::clone(&store), Visibility::Public);
        assert!(cache.snapshot().is_empty());

        store
            .upsert_by_name(PublicationDraft::new("Forbes", Money::new(50000, Currency::USD)))
            .await
            .unwrap();
        // Nothing moves until a refresh; the feed is invalidation, not magic.
        assert!(cache.snapshot().is_empty());

        cache.refresh().await;
        assert_eq!(cache.snapshot().len(), 1);
        assert_eq!(cache.snapshot()[0].name, "Forbes");
    }

    #[tokio::test]
    async fn test_run_refetches_on_change() {
        let store = Arc::new(InMemoryCatalog::new());
        let cache = Arc::new(CachedCatalog::new(Arc::clone(&store), Visibility::Public));

        let runner = {
            let cache = Arc::clone(&cache);
            tokio::spawn(async move { cache.run().await })
        };
        // Let the runner subscribe before the write fires its event.
        tokio::task::yield_now().await;

        store
            .upsert_by_name(PublicationDraft::new("Forbes", Money::new(50000, Currency::USD)))
            .await
            .unwrap();

        // The refetch is eventually consistent; poll briefly rather than
        // assuming it lands before we look.
        let mut seen = false;
        for _ in 0..50 {
            if !cache.snapshot().is_empty() {
                seen = true;
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }
        assert!(seen, "change event did not trigger a refetch");

        runner.abort();
    }
}

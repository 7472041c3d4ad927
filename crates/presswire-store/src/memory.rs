//! In-memory catalog backend.
//!
//! Reference implementation of [`CatalogStore`] for tests and local
//! development. Behaves like the managed platform: soft deletes, upsert by
//! name, a change event on every write.

use crate::catalog::{CatalogStore, ChangeEvent, UpsertOutcome};
use crate::error::StoreError;
use async_trait::async_trait;
use presswire_commerce::catalog::{Publication, PublicationDraft};
use presswire_commerce::ids::PublicationId;
use std::sync::RwLock;
use tokio::sync::broadcast;

const CHANGE_CHANNEL_CAPACITY: usize = 64;

/// An in-memory [`CatalogStore`].
pub struct InMemoryCatalog {
    rows: RwLock<Vec<Publication>>,
    changes: broadcast::Sender<ChangeEvent>,
}

impl InMemoryCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Self {
            rows: RwLock::new(Vec::new()),
            changes,
        }
    }

    /// Create a catalog seeded with publications.
    pub fn with_rows(rows: Vec<Publication>) -> Self {
        let store = Self::new();
        {
            let mut guard = store.rows.write().unwrap_or_else(|e| e.into_inner());
            *guard = rows;
        }
        store
    }

    /// Number of rows held, active or not.
    pub fn len(&self) -> usize {
        self.rows.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn emit(&self, event: ChangeEvent) {
        // Nobody listening is fine.
        let _ = self.changes.send(event);
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalog {
    async fn active_by_popularity(&self) -> Result<Vec<Publication>, StoreError> {
        let guard = self.rows.read().unwrap_or_else(|e| e.into_inner());
        let mut rows: Vec<Publication> = guard.iter().filter(|p| p.is_active).cloned().collect();
        // Stable sort keeps insertion order among equal popularity.
        rows.sort_by_key(|p| std::cmp::Reverse(p.popularity));
        Ok(rows)
    }

    async fn upsert_by_name(&self, draft: PublicationDraft) -> Result<UpsertOutcome, StoreError> {
        let event;
        let outcome;
        {
            let mut guard = self.rows.write().unwrap_or_else(|e| e.into_inner());
            if let Some(existing) = guard.iter_mut().find(|p| p.name == draft.name) {
                existing.apply_draft(&draft);
                event = ChangeEvent::Updated(existing.id.clone());
                outcome = UpsertOutcome::Updated;
            } else {
                let publication = draft.into_publication();
                event = ChangeEvent::Inserted(publication.id.clone());
                guard.push(publication);
                outcome = UpsertOutcome::Inserted;
            }
        }
        self.emit(event);
        Ok(outcome)
    }

    async fn deactivate(&self, id: &PublicationId) -> Result<(), StoreError> {
        {
            let mut guard = self.rows.write().unwrap_or_else(|e| e.into_inner());
            let publication = guard
                .iter_mut()
                .find(|p| &p.id == id)
                .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
            publication.deactivate();
        }
        self.emit(ChangeEvent::Deactivated(id.clone()));
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.changes.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use presswire_commerce::money::{Currency, Money};

    fn seeded() -> InMemoryCatalog {
        let mut forbes = Publication::new("Forbes", Money::new(50000, Currency::USD));
        forbes.popularity = 90;
        let mut wired = Publication::new("Wired", Money::new(30000, Currency::USD));
        wired.popularity = 95;
        let mut dormant = Publication::new("Dormant Daily", Money::new(1000, Currency::USD));
        dormant.is_active = false;
        InMemoryCatalog::with_rows(vec![forbes, wired, dormant])
    }

    #[tokio::test]
    async fn test_active_rows_ordered_by_popularity() {
        let store = seeded();
        let rows = store.active_by_popularity().await.unwrap();
        let names: Vec<&str> = rows.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Wired", "Forbes"]);
    }

    #[tokio::test]
    async fn test_upsert_inserts_then_updates() {
        let store = InMemoryCatalog::new();

        let draft = PublicationDraft::new("Forbes", Money::new(50000, Currency::USD));
        let outcome = store.upsert_by_name(draft).await.unwrap();
        assert_eq!(outcome, UpsertOutcome::Inserted);
        assert_eq!(store.len(), 1);

        let mut draft = PublicationDraft::new("Forbes", Money::new(60000, Currency::USD));
        draft.da_score = 94;
        let outcome = store.upsert_by_name(draft).await.unwrap();
        assert_eq!(outcome, UpsertOutcome::Updated);
        assert_eq!(store.len(), 1);

        let rows = store.active_by_popularity().await.unwrap();
        assert_eq!(rows[0].price.amount_cents, 60000);
        assert_eq!(rows[0].da_score, 94);
    }

    #[tokio::test]
    async fn test_deactivate_hides_but_keeps_row() {
        let store = seeded();
        let rows = store.active_by_popularity().await.unwrap();
        let id = rows[0].id.clone();

        store.deactivate(&id).await.unwrap();
        let rows = store.active_by_popularity().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(store.len(), 3);
    }

    #[tokio::test]
    async fn test_deactivate_unknown_id() {
        let store = InMemoryCatalog::new();
        let result = store.deactivate(&PublicationId::new("missing")).await;
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_writes_emit_change_events() {
        let store = InMemoryCatalog::new();
        let mut rx = store.subscribe();

        store
            .upsert_by_name(PublicationDraft::new("Forbes", Money::new(50000, Currency::USD)))
            .await
            .unwrap();
        assert!(matches!(rx.recv().await, Ok(ChangeEvent::Inserted(_))));

        store
            .upsert_by_name(PublicationDraft::new("Forbes", Money::new(55000, Currency::USD)))
            .await
            .unwrap();
        assert!(matches!(rx.recv().await, Ok(ChangeEvent::Updated(_))));
    }

    #[tokio::test]
    async fn test_popularity_tie_keeps_insertion_order() {
        let a = Publication::new("Alpha Post", Money::new(1000, Currency::USD));
        let b = Publication::new("Beta Times", Money::new(1000, Currency::USD));
        let store = InMemoryCatalog::with_rows(vec![a, b]);
        let rows = store.active_by_popularity().await.unwrap();
        let names: Vec<&str> = rows.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha Post", "Beta Times"]);
    }
}

//! The catalog store trait and its change feed.

use crate::error::StoreError;
use async_trait::async_trait;
use presswire_commerce::catalog::{Publication, PublicationDraft};
use presswire_commerce::ids::PublicationId;
use tokio::sync::broadcast;

/// Change notification emitted on any catalog write.
///
/// The feed is a cache-invalidation signal, not a consistency protocol:
/// subscribers refetch the whole catalog on any event and never reconcile
/// partial updates. Delivery is eventually consistent with local writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeEvent {
    Inserted(PublicationId),
    Updated(PublicationId),
    Deactivated(PublicationId),
}

impl ChangeEvent {
    /// The publication the event concerns.
    pub fn publication_id(&self) -> &PublicationId {
        match self {
            ChangeEvent::Inserted(id) | ChangeEvent::Updated(id) | ChangeEvent::Deactivated(id) => {
                id
            }
        }
    }
}

/// Whether an upsert created a row or updated an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Updated,
}

/// The backing catalog store.
///
/// Implementations own filtering (`is_active`) and ordering (popularity
/// descending). Callers must not rely on any further ordering guarantee.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Active publications ordered by descending popularity.
    async fn active_by_popularity(&self) -> Result<Vec<Publication>, StoreError>;

    /// Insert a publication, or update the one with the same name.
    async fn upsert_by_name(&self, draft: PublicationDraft) -> Result<UpsertOutcome, StoreError>;

    /// Soft-delete a publication. The row survives with `is_active = false`.
    async fn deactivate(&self, id: &PublicationId) -> Result<(), StoreError>;

    /// Subscribe to change notifications.
    fn subscribe(&self) -> broadcast::Receiver<ChangeEvent>;
}

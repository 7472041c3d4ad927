//! REST client for the managed data platform.
//!
//! The platform exposes the catalog as a `publications` resource with
//! query-parameter filtering and ordering, upsert-on-conflict via POST, and
//! soft delete via PATCH. Rows are tolerant JSON: any field the platform
//! omits deserializes to its zero/empty value, which is exactly the coercion
//! the authenticated catalog projection requires.

use crate::catalog::{CatalogStore, ChangeEvent, UpsertOutcome};
use crate::error::StoreError;
use async_trait::async_trait;
use presswire_commerce::catalog::{
    ContentRestrictions, PlacementFeatures, Publication, PublicationDraft, Tier,
};
use presswire_commerce::ids::PublicationId;
use presswire_commerce::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

const CHANGE_CHANNEL_CAPACITY: usize = 64;

/// A publication row as the platform serves it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct PublicationRow {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub tier: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub price_cents: i64,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub turnaround: Option<String>,
    #[serde(default)]
    pub da_score: i32,
    #[serde(default)]
    pub dr_score: i32,
    #[serde(flatten)]
    pub features: PlacementFeatures,
    #[serde(flatten)]
    pub restrictions: ContentRestrictions,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub popularity: i64,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

fn default_active() -> bool {
    true
}

impl From<PublicationRow> for Publication {
    fn from(row: PublicationRow) -> Self {
        let currency = row
            .currency
            .as_deref()
            .and_then(Currency::from_code)
            .unwrap_or_default();
        Publication {
            id: PublicationId::new(row.id),
            name: row.name,
            genre: row.genre,
            tier: row.tier.as_deref().and_then(Tier::from_str).unwrap_or_default(),
            description: row.description,
            website_url: row.website_url,
            logo_url: row.logo_url,
            region: row.region,
            price: Money::new(row.price_cents, currency),
            turnaround: row.turnaround,
            da_score: row.da_score,
            dr_score: row.dr_score,
            features: row.features,
            restrictions: row.restrictions,
            is_active: row.is_active,
            popularity: row.popularity,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// The upsert payload for a rate-sheet draft.
#[derive(Debug, Serialize)]
struct DraftRow<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    genre: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    region: Option<&'a str>,
    price_cents: i64,
    currency: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    turnaround: Option<&'a str>,
    da_score: i32,
    dr_score: i32,
    #[serde(flatten)]
    features: PlacementFeatures,
    #[serde(flatten)]
    restrictions: ContentRestrictions,
}

impl<'a> From<&'a PublicationDraft> for DraftRow<'a> {
    fn from(draft: &'a PublicationDraft) -> Self {
        Self {
            name: &draft.name,
            genre: draft.genre.as_deref(),
            region: draft.region.as_deref(),
            price_cents: draft.price.amount_cents,
            currency: draft.price.currency.code(),
            turnaround: draft.turnaround.as_deref(),
            da_score: draft.da_score,
            dr_score: draft.dr_score,
            features: draft.features,
            restrictions: draft.restrictions,
        }
    }
}

/// A [`CatalogStore`] backed by the platform's REST surface.
///
/// The platform's own realtime channel is a separate collaborator; this
/// client echoes a change event for each write it performs so local
/// subscribers invalidate without waiting on the push channel.
pub struct RestCatalog {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    changes: broadcast::Sender<ChangeEvent>,
}

impl RestCatalog {
    /// Create a client for the given platform base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: None,
            changes,
        }
    }

    /// Attach the platform API key sent with every request.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    fn publications_url(&self) -> String {
        format!("{}/publications", self.base_url)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request
                .header("apikey", key)
                .header("Authorization", format!("Bearer {key}")),
            None => request,
        }
    }

    fn emit(&self, event: ChangeEvent) {
        let _ = self.changes.send(event);
    }

    async fn fetch_rows(&self) -> Result<Vec<PublicationRow>, StoreError> {
        let request = self
            .http
            .get(self.publications_url())
            .query(&[
                ("select", "*"),
                ("is_active", "eq.true"),
                ("order", "popularity.desc"),
            ]);
        let response = self.authorize(request).send().await?;
        let response = response
            .error_for_status()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl CatalogStore for RestCatalog {
    async fn active_by_popularity(&self) -> Result<Vec<Publication>, StoreError> {
        let rows = self.fetch_rows().await?;
        Ok(rows.into_iter().map(Publication::from).collect())
    }

    async fn upsert_by_name(&self, draft: PublicationDraft) -> Result<UpsertOutcome, StoreError> {
        let request = self
            .http
            .post(self.publications_url())
            .query(&[("on_conflict", "name")])
            .header("Prefer", "resolution=merge-duplicates,return=representation")
            .json(&DraftRow::from(&draft));
        let response = self.authorize(request).send().await?;

        // 201 means a fresh row; merged rows come back 200.
        let outcome = if response.status() == reqwest::StatusCode::CREATED {
            UpsertOutcome::Inserted
        } else {
            UpsertOutcome::Updated
        };
        let response = response
            .error_for_status()
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        let rows: Vec<PublicationRow> = response.json().await?;
        let row = rows
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::Decode("upsert returned no row".to_string()))?;
        let id = PublicationId::new(row.id);
        self.emit(match outcome {
            UpsertOutcome::Inserted => ChangeEvent::Inserted(id),
            UpsertOutcome::Updated => ChangeEvent::Updated(id),
        });
        Ok(outcome)
    }

    async fn deactivate(&self, id: &PublicationId) -> Result<(), StoreError> {
        let request = self
            .http
            .patch(self.publications_url())
            .query(&[("id", format!("eq.{}", id.as_str()))])
            .json(&serde_json::json!({ "is_active": false }));
        let response = self.authorize(request).send().await?;
        response
            .error_for_status()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
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
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_fetch_decodes_sparse_rows() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/publications");
                then.status(200)
                    .header("content-type", "application/json")
                    .body(
                        r#"[
                          {"id":"pub-1","name":"Forbes","price_cents":50000,"da_score":94,
                           "dofollow":true,"crypto":true,"popularity":90},
                          {"id":"pub-2","name":"Tiny Outlet"}
                        ]"#,
                    );
            })
            .await;

        let store = RestCatalog::new(server.base_url());
        let rows = store.active_by_popularity().await.unwrap();
        mock.assert_async().await;

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Forbes");
        assert!(rows[0].features.dofollow);
        assert!(rows[0].restrictions.crypto);

        // Fields the platform omitted coerce to zero/empty, not errors.
        let sparse = &rows[1];
        assert_eq!(sparse.price.amount_cents, 0);
        assert_eq!(sparse.da_score, 0);
        assert_eq!(sparse.popularity, 0);
        assert!(sparse.is_active);
        assert_eq!(sparse.features, PlacementFeatures::default());
    }

    #[tokio::test]
    async fn test_backend_failure_is_an_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/publications");
                then.status(500);
            })
            .await;

        let store = RestCatalog::new(server.base_url());
        assert!(store.active_by_popularity().await.is_err());
    }

    #[tokio::test]
    async fn test_upsert_posts_with_conflict_target() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/publications")
                    .query_param("on_conflict", "name");
                then.status(201)
                    .header("content-type", "application/json")
                    .body(r#"[{"id":"pub-1","name":"Forbes","price_cents":50000}]"#);
            })
            .await;

        let store = RestCatalog::new(server.base_url());
        let mut rx = store.subscribe();
        let draft = PublicationDraft::new("Forbes", Money::new(50000, Currency::USD));
        let outcome = store.upsert_by_name(draft).await.unwrap();
        mock.assert_async().await;

        assert_eq!(outcome, UpsertOutcome::Inserted);
        assert!(matches!(rx.recv().await, Ok(ChangeEvent::Inserted(_))));
    }
}

//! Best-effort logo discovery.

use serde::Deserialize;

/// Looks up an outlet's logo through a brand-search API.
///
/// Pure best-effort: no contract on freshness or success rate. Any failure,
/// including a missing API key, falls back to a deterministic favicon URL
/// for the domain, so callers always get something renderable and never an
/// error. Failures are debug-logged only; this is the one seam where silent
/// degradation is the intended behavior.
pub struct BrandLookup {
    http: reqwest::Client,
    api_base: String,
    api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BrandHit {
    #[serde(default)]
    icon: Option<String>,
    #[serde(default)]
    logo: Option<String>,
}

impl BrandLookup {
    const DEFAULT_API_BASE: &'static str = "https://api.brandfetch.io/v2";

    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: Self::DEFAULT_API_BASE.to_string(),
            api_key: None,
        }
    }

    /// Point at a different API base (tests, proxies).
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// The favicon-service URL used whenever discovery fails.
    pub fn fallback_logo(domain: &str) -> String {
        format!(
            "https://www.google.com/s2/favicons?sz=128&domain={}",
            domain.trim()
        )
    }

    /// Find a logo URL for a domain, falling back to the favicon service.
    pub async fn logo_for(&self, domain: &str) -> String {
        match self.search(domain).await {
            Some(url) => url,
            None => {
                tracing::debug!(domain, "brand lookup fell back to favicon");
                Self::fallback_logo(domain)
            }
        }
    }

    async fn search(&self, domain: &str) -> Option<String> {
        let key = self.api_key.as_ref()?;
        let url = format!("{}/search/{}", self.api_base, domain.trim());
        let response = self
            .http
            .get(url)
            .header("Authorization", format!("Bearer {key}"))
            .send()
            .await
            .ok()?
            .error_for_status()
            .ok()?;
        let hits: Vec<BrandHit> = response.json().await.ok()?;
        hits.into_iter().find_map(|hit| hit.icon.or(hit.logo))
    }
}

impl Default for BrandLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn test_fallback_is_deterministic() {
        assert_eq!(
            BrandLookup::fallback_logo("forbes.com"),
            "https://www.google.com/s2/favicons?sz=128&domain=forbes.com"
        );
    }

    #[tokio::test]
    async fn test_no_api_key_falls_back() {
        let lookup = BrandLookup::new();
        let url = lookup.logo_for("forbes.com").await;
        assert!(url.contains("favicons"));
        assert!(url.contains("forbes.com"));
    }

    #[tokio::test]
    async fn test_hit_returns_discovered_logo() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/search/forbes.com");
                then.status(200)
                    .header("content-type", "application/json")
                    .body(r#"[{"icon":"https://cdn.example.com/forbes.png"}]"#);
            })
            .await;

        let lookup = BrandLookup::new()
            .with_api_base(server.base_url())
            .with_api_key("key");
        let url = lookup.logo_for("forbes.com").await;
        assert_eq!(url, "https://cdn.example.com/forbes.png");
    }

    #[tokio::test]
    async fn test_api_failure_falls_back() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/search/forbes.com");
                then.status(503);
            })
            .await;

        let lookup = BrandLookup::new()
            .with_api_base(server.base_url())
            .with_api_key("key");
        let url = lookup.logo_for("forbes.com").await;
        assert!(url.contains("favicons"));
    }
}

//! HTTP world page fetcher

use async_trait::async_trait;

use super::{parse_world_page, WorldFetcher, USER_AGENT, WORLD_PAGE_URL};
use crate::types::{FetchError, WorldSnapshot};

/// Fetches world pages over HTTPS.
///
/// No request timeout is configured: a hung request holds the poll loop
/// until the connection fails.
pub struct HttpWorldFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl HttpWorldFetcher {
    /// Fetcher for the public world pages
    pub fn new() -> Result<Self, FetchError> {
        Self::with_base_url(WORLD_PAGE_URL)
    }

    /// Fetcher for a custom URL prefix (the world id is appended)
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// URL of the page for `id`
    pub fn world_url(&self, id: &str) -> String {
        format!("{}{}", self.base_url, id)
    }

    /// Fetch and parse, reporting why it failed
    pub async fn try_fetch(&self, id: &str) -> Result<WorldSnapshot, FetchError> {
        if id.is_empty() {
            return Err(FetchError::EmptyId);
        }

        let response = self.client.get(self.world_url(id)).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        parse_world_page(id, &body)
    }
}

#[async_trait]
impl WorldFetcher for HttpWorldFetcher {
    async fn fetch(&self, id: &str) -> Option<WorldSnapshot> {
        match self.try_fetch(id).await {
            Ok(snapshot) => {
                tracing::info!(
                    world_id = %id,
                    world_name = %snapshot.name,
                    author_name = %snapshot.author_name,
                    image_url = %snapshot.image_url,
                    "fetched world info"
                );
                Some(snapshot)
            }
            Err(e) => {
                tracing::error!(world_id = %id, error = %e, "failed to fetch world info");
                None
            }
        }
    }
}

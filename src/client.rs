// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::{MelodyError, Result};
use crate::models::{Album, Entity, SearchResponse, Track};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, trace};
use url::Url;

const SEARCH_API_BASE: &str = "https://sticky-summer-lb.inkstone-clients.net/api/v1";
const USER_AGENT: &str = concat!("Melody/", env!("CARGO_PKG_VERSION"));

const DEFAULT_COUNTRY: &str = "de";
const DEFAULT_LANGUAGE: &str = "en_us";
const DEFAULT_LIMIT: u32 = 30;

/// Client for the music catalog search API.
#[derive(Debug, Clone)]
pub struct MelodyClient {
    client: Client,
    base_url: String,
    country: String,
    language: String,
    limit: u32,
}

impl MelodyClient {
    /// Create a new client with default settings.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a client builder for custom configuration.
    pub fn builder() -> MelodyClientBuilder {
        MelodyClientBuilder::default()
    }

    /// Search the catalog for albums.
    ///
    /// # Example
    /// ```no_run
    /// # use melody::MelodyClient;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = MelodyClient::new()?;
    /// let albums = client.search_albums("nirvana").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search_albums(&self, term: &str) -> Result<Vec<Album>> {
        self.search(term, Entity::Album).await
    }

    /// Search the catalog for tracks.
    ///
    /// # Example
    /// ```no_run
    /// # use melody::MelodyClient;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = MelodyClient::new()?;
    /// let tracks = client.search_tracks("lucky").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search_tracks(&self, term: &str) -> Result<Vec<Track>> {
        self.search(term, Entity::Track).await
    }

    async fn search<T: DeserializeOwned>(&self, term: &str, entity: Entity) -> Result<Vec<T>> {
        let url = self.search_url(term, entity)?;
        let response: SearchResponse<T> = self.get(url.as_str()).await?;
        Ok(response.results)
    }

    /// Build the search URL for a term and media kind.
    fn search_url(&self, term: &str, entity: Entity) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/searchMusic", self.base_url))
            .map_err(|e| MelodyError::InvalidResponse(e.to_string()))?;

        url.query_pairs_mut()
            .append_pair("term", term)
            .append_pair("country", &self.country)
            .append_pair("media", "appleMusic")
            .append_pair("entity", entity.as_str())
            .append_pair("genreId", "")
            .append_pair("limit", &self.limit.to_string())
            .append_pair("lang", &self.language);

        Ok(url)
    }

    /// Internal method to perform GET requests and decode the JSON body.
    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        trace!(target: "melody", "GET {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        debug!(target: "melody", "response status: {}", status);

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(MelodyError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        trace!(target: "melody", "response body: {}", body);

        serde_json::from_str(&body)
            .map_err(|e| MelodyError::InvalidResponse(format!("Failed to parse response: {}", e)))
    }
}

/// Builder for configuring a search client.
#[derive(Debug)]
pub struct MelodyClientBuilder {
    base_url: String,
    timeout: Duration,
    country: String,
    language: String,
    limit: u32,
}

impl Default for MelodyClientBuilder {
    fn default() -> Self {
        Self {
            base_url: SEARCH_API_BASE.to_string(),
            timeout: Duration::from_secs(30),
            country: DEFAULT_COUNTRY.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            limit: DEFAULT_LIMIT,
        }
    }
}

impl MelodyClientBuilder {
    /// Set a custom base URL (useful for testing with mock servers).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout duration.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the storefront country code sent with each search.
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Set the result language sent with each search.
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the maximum number of results per search.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Build the search client.
    pub fn build(self) -> Result<MelodyClient> {
        let client = Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(MelodyClient {
            client,
            base_url: self.base_url,
            country: self.country,
            language: self.language,
            limit: self.limit,
        })
    }
}

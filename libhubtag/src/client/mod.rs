//! HTTP client for the Docker Hub tag-listing API.
//!
//! A thin wrapper over reqwest that issues the single
//! `GET /v2/repositories/{repository}/tags` request, translates transport
//! and status failures into [`HubError`], and deserializes the `results`
//! field of the response body.

use crate::agent::{NoUserAgent, UserAgentProvider};
use crate::error::{HubError, Result};
use crate::model::TagRecord;
use reqwest::{Client as ReqwestClient, Response, StatusCode};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

#[cfg(test)]
mod tests;

/// Default public hub endpoint.
pub const DEFAULT_BASE_URL: &str = "https://hub.docker.com";

/// One page of the tag listing. Only `results` is consumed; the hub's
/// pagination links are not followed.
#[derive(Debug, Deserialize)]
struct TagPage {
    results: Vec<TagRecord>,
}

/// HTTP client tuning knobs.
///
/// # Examples
///
/// ```
/// use libhubtag::client::ClientConfig;
///
/// let config = ClientConfig::new().with_timeout(60);
/// assert_eq!(config.timeout_seconds, 60);
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout in seconds (default: 30).
    pub timeout_seconds: u64,
    /// Maximum idle connections kept per host (default: 4).
    pub max_idle_per_host: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            max_idle_per_host: 4,
        }
    }
}

impl ClientConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the request timeout in seconds.
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    /// Sets the maximum idle connections per host.
    pub fn with_max_idle_per_host(mut self, max: usize) -> Self {
        self.max_idle_per_host = max;
        self
    }
}

/// Client for the hub's repository tag API.
#[derive(Clone)]
pub struct HubClient {
    http: ReqwestClient,
    base_url: String,
    agent: Arc<dyn UserAgentProvider>,
}

impl std::fmt::Debug for HubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HubClient")
            .field("http", &self.http)
            .field("base_url", &self.base_url)
            .field("agent", &"<dyn UserAgentProvider>")
            .finish()
    }
}

impl HubClient {
    /// Creates a client for `base_url` with default configuration and no
    /// `User-Agent` header.
    ///
    /// # Examples
    ///
    /// ```
    /// use libhubtag::client::{HubClient, DEFAULT_BASE_URL};
    ///
    /// let client = HubClient::new(DEFAULT_BASE_URL).unwrap();
    /// assert_eq!(client.base_url(), "https://hub.docker.com");
    /// ```
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_config(base_url, ClientConfig::default())
    }

    /// Creates a client for `base_url` with custom configuration.
    pub fn with_config(base_url: &str, config: ClientConfig) -> Result<Self> {
        let base_url = Self::normalize_base_url(base_url)?;

        let http = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .pool_max_idle_per_host(config.max_idle_per_host)
            .build()
            .map_err(|e| HubError::network_with_source("failed to build HTTP client", e))?;

        Ok(Self {
            http,
            base_url,
            agent: Arc::new(NoUserAgent),
        })
    }

    /// Replaces the user-agent source consulted on every request.
    pub fn with_agent(mut self, agent: Arc<dyn UserAgentProvider>) -> Self {
        self.agent = agent;
        self
    }

    /// Base URL after normalization.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ensures the base URL has a scheme and no trailing slashes. The hub is
    /// a public endpoint, so a missing scheme defaults to https.
    fn normalize_base_url(url: &str) -> Result<String> {
        let url = url.trim();

        if url.is_empty() {
            return Err(HubError::config("hub base URL cannot be empty"));
        }

        let url = if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else {
            format!("https://{}", url)
        };

        Ok(url.trim_end_matches('/').to_string())
    }

    fn tags_url(&self, repository: &str, page_size: u32) -> String {
        format!(
            "{}/v2/repositories/{}/tags?page_size={}",
            self.base_url, repository, page_size
        )
    }

    /// Fetches one page of tag records for `repository`.
    ///
    /// Exactly one GET is issued; the hub's `next` link is never followed.
    ///
    /// # Arguments
    ///
    /// * `repository` - Namespaced repository, e.g. "library/telegraf"
    /// * `page_size` - Number of records to request; must be positive
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty repository or a zero page
    /// size, before any I/O happens. Transport failures surface as network
    /// errors, unparseable bodies as validation errors, and HTTP error
    /// statuses map onto the rest of the [`HubError`] taxonomy.
    pub async fn fetch_tags(&self, repository: &str, page_size: u32) -> Result<Vec<TagRecord>> {
        if repository.trim().is_empty() {
            return Err(HubError::validation("repository cannot be empty"));
        }
        if page_size == 0 {
            return Err(HubError::validation(
                "page size must be greater than zero",
            ));
        }

        let url = self.tags_url(repository, page_size);

        let mut request = self.http.get(&url);
        if let Some(agent) = self.agent.user_agent() {
            request = request.header(reqwest::header::USER_AGENT, agent);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Self::translate_reqwest_error(e, &url))?;

        let response = Self::check_status(response, repository).await?;

        let page: TagPage = response.json().await.map_err(|e| {
            HubError::validation_with_source("failed to parse tag listing response", e)
        })?;

        Ok(page.results)
    }

    /// Translates a reqwest error into a HubError.
    fn translate_reqwest_error(error: reqwest::Error, url: &str) -> HubError {
        if error.is_timeout() {
            HubError::network(format!("request to {} timed out", url))
        } else if error.is_connect() {
            HubError::network_with_source(format!("failed to connect to {}", url), error)
        } else {
            HubError::network_with_source(format!("request to {} failed", url), error)
        }
    }

    /// Maps HTTP error statuses onto the error taxonomy.
    async fn check_status(response: Response, repository: &str) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().to_string();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| String::from("(unreadable response body)"));

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(HubError::authentication(
                format!("hub refused access to {}: {}", url, body),
                Some(status.as_u16()),
            )),
            StatusCode::NOT_FOUND => Err(HubError::not_found("repository", repository)),
            StatusCode::TOO_MANY_REQUESTS => Err(HubError::rate_limit(format!(
                "hub rate limit hit for {}",
                url
            ))),
            s if s.is_server_error() => Err(HubError::server(
                format!("hub error from {}: {}", url, body),
                s.as_u16(),
            )),
            _ => Err(HubError::network(format!(
                "unexpected HTTP {} from {}: {}",
                status.as_u16(),
                url,
                body
            ))),
        }
    }
}

//! High-level entry point tying the fetcher, resolver, and mapper together.
//!
//! This is the recommended way to use the library: one [`Hub`] handle, one
//! call per question.
//!
//! # Examples
//!
//! ```no_run
//! use libhubtag::Hub;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let hub = Hub::new()?;
//!
//!     let resolved = hub.resolve_latest("telegraf").await?;
//!     println!("{} is {}", resolved.image, resolved.digest);
//!     for tag in resolved.tags {
//!         println!("  {}", tag);
//!     }
//!
//!     Ok(())
//! }
//! ```

use crate::agent::UserAgentProvider;
use crate::client::{ClientConfig, DEFAULT_BASE_URL, HubClient};
use crate::error::{HubError, Result};
use crate::model::{ResolvedImage, TagRecord};
use crate::resolve::{LATEST_TAG, latest_digest, tags_for_digest};
use std::sync::Arc;

#[cfg(test)]
#[path = "hub_tests.rs"]
mod tests;

/// Default number of tag records requested per invocation.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// High-level handle for hub tag queries.
#[derive(Debug)]
pub struct Hub {
    client: HubClient,
    page_size: u32,
}

impl Hub {
    /// Handle against the public hub endpoint with default settings.
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: HubClient::new(DEFAULT_BASE_URL)?,
            page_size: DEFAULT_PAGE_SIZE,
        })
    }

    /// Creates a builder for custom configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use libhubtag::Hub;
    ///
    /// let hub = Hub::builder().page_size(50).build().unwrap();
    /// ```
    pub fn builder() -> HubBuilder {
        HubBuilder::new()
    }

    /// Fetches one page of tag records for `repository`.
    ///
    /// Bare names are treated as official images: `telegraf` becomes
    /// `library/telegraf`.
    pub async fn list_tags(&self, repository: &str) -> Result<Vec<TagRecord>> {
        let repository = normalize_repository(repository);
        self.client.fetch_tags(&repository, self.page_size).await
    }

    /// Resolves which tags currently share the `latest` digest.
    ///
    /// Fetches one page of records, finds the digest of the record tagged
    /// `latest`, and collects every tag name sharing that digest.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when no fetched record is tagged `latest`
    /// (or the record carries no digest), alongside the fetch failure modes
    /// of [`HubClient::fetch_tags`].
    pub async fn resolve_latest(&self, repository: &str) -> Result<ResolvedImage> {
        let repository = normalize_repository(repository);
        let records = self.client.fetch_tags(&repository, self.page_size).await?;

        let digest = latest_digest(&records)
            .ok_or_else(|| HubError::not_found("tag", LATEST_TAG))?
            .to_string();
        let tags = tags_for_digest(&records, &digest);

        Ok(ResolvedImage {
            image: repository,
            digest,
            tags,
        })
    }
}

/// Prefixes bare image names with the official `library/` namespace.
///
/// # Examples
///
/// ```
/// use libhubtag::normalize_repository;
///
/// assert_eq!(normalize_repository("telegraf"), "library/telegraf");
/// assert_eq!(normalize_repository("acme/app"), "acme/app");
/// ```
pub fn normalize_repository(repository: &str) -> String {
    if repository.contains('/') {
        repository.to_string()
    } else {
        format!("library/{}", repository)
    }
}

/// Builder for [`Hub`].
pub struct HubBuilder {
    base_url: String,
    page_size: u32,
    client_config: ClientConfig,
    agent: Option<Arc<dyn UserAgentProvider>>,
}

impl HubBuilder {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            client_config: ClientConfig::default(),
            agent: None,
        }
    }

    /// Overrides the hub endpoint, mainly for tests and mirrors.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the number of tag records requested per call.
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Tunes the underlying HTTP client.
    pub fn client_config(mut self, config: ClientConfig) -> Self {
        self.client_config = config;
        self
    }

    /// Sets the user-agent source consulted on every request.
    pub fn agent(mut self, agent: Arc<dyn UserAgentProvider>) -> Self {
        self.agent = Some(agent);
        self
    }

    /// Builds the handle, validating the page size and base URL.
    pub fn build(self) -> Result<Hub> {
        if self.page_size == 0 {
            return Err(HubError::validation(
                "page size must be greater than zero",
            ));
        }

        let mut client = HubClient::with_config(&self.base_url, self.client_config)?;
        if let Some(agent) = self.agent {
            client = client.with_agent(agent);
        }

        Ok(Hub {
            client,
            page_size: self.page_size,
        })
    }
}

impl Default for HubBuilder {
    fn default() -> Self {
        Self::new()
    }
}

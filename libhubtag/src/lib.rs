//! Hubtag - Docker Hub tag resolution library
//!
//! Queries the Docker Hub tag-listing API, determines which tags currently
//! share the digest of the `latest` tag, and reshapes saved tag data into
//! comma-separated `name:tag` strings.
//!
//! # Quick Start
//!
//! ```no_run
//! use libhubtag::Hub;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let hub = Hub::new()?;
//!
//!     // Which tags point at the same build as `latest`?
//!     let resolved = hub.resolve_latest("telegraf").await?;
//!     println!("{}", serde_json::to_string_pretty(&resolved)?);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Main Types
//!
//! - [`Hub`] / [`HubBuilder`] - High-level entry point for hub queries
//! - [`TagRecord`] - One entry from the hub's tag listing
//! - [`ResolvedImage`] - The `{image, digest, tags}` resolution result
//! - [`UserAgentProvider`] - Pluggable `User-Agent` source for requests
//! - [`Digest`] - Validated content digest
//!
//! The low-level pieces ([`client`], [`resolve`], [`csv`]) are public for
//! callers that need just one of them.

#![warn(clippy::all)]

/// Returns the libhubtag crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// High-level public API (main entry point)
mod hub;
pub use hub::{DEFAULT_PAGE_SIZE, Hub, HubBuilder, normalize_repository};

// Re-export commonly used types for convenience
pub use agent::{BrowserAgentPool, NoUserAgent, StaticUserAgent, UserAgentProvider};
pub use client::{ClientConfig, DEFAULT_BASE_URL, HubClient};
pub use digest::Digest;
pub use error::{HubError, Result};
pub use model::{ResolvedImage, TagRecord};

pub mod agent;
pub mod client;
pub mod csv;
pub mod digest;
pub mod error;
pub mod format;
pub mod model;
pub mod resolve;

//! Wire and output types for the hub tag API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};


/// One entry from the hub's tag listing.
///
/// Only the fields the toolkit consumes are modeled; anything else in the
/// payload is ignored on deserialization. `digest` is optional because the
/// hub omits it for tags whose manifests are gone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagRecord {
    /// Tag name, e.g. "latest" or "1.28".
    pub name: String,
    /// Content digest shared by every tag pointing at the same build.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
    /// Compressed image size in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_size: Option<u64>,
    /// When the tag was last pushed or updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
    /// Lifecycle status reported by the hub ("active", "inactive").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_status: Option<String>,
}

/// Result of resolving which tags currently share the `latest` digest.
///
/// Serializes to the `{image, digest, tags}` object printed by the resolve
/// command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedImage {
    /// Repository the resolution ran against, namespace included.
    pub image: String,
    /// Digest of the record tagged `latest`.
    pub digest: String,
    /// All tag names sharing that digest, in listing order.
    pub tags: Vec<String>,
}

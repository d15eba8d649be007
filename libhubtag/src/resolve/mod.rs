//! Digest resolution over fetched tag records.
//!
//! Pure functions: nothing here touches the network or mutates its input.

use crate::model::TagRecord;


/// The tag name the hub uses for the current default build.
pub const LATEST_TAG: &str = "latest";

/// Returns the digest of the record tagged `latest`.
///
/// Absence is explicit: `None` when no record carries that name, or when the
/// matching record has no digest. Should the input somehow contain several
/// `latest` records, the last one wins.
///
/// # Examples
///
/// ```
/// use libhubtag::model::TagRecord;
/// use libhubtag::resolve::latest_digest;
///
/// let records: Vec<TagRecord> = serde_json::from_str(
///     r#"[{"name": "latest", "digest": "sha256:abc"}, {"name": "v1", "digest": "sha256:abc"}]"#,
/// )
/// .unwrap();
/// assert_eq!(latest_digest(&records), Some("sha256:abc"));
/// ```
pub fn latest_digest(records: &[TagRecord]) -> Option<&str> {
    records
        .iter()
        .rev()
        .find(|record| record.name == LATEST_TAG)
        .and_then(|record| record.digest.as_deref())
}

/// Returns the names of all records whose digest equals `digest`, preserving
/// input order.
///
/// An unknown digest yields an empty vector; this never fails.
pub fn tags_for_digest(records: &[TagRecord], digest: &str) -> Vec<String> {
    records
        .iter()
        .filter(|record| record.digest.as_deref() == Some(digest))
        .map(|record| record.name.clone())
        .collect()
}

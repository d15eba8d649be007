//! Content digest validation.
//!
//! Digests coming back from the hub are trusted as-is; this type exists to
//! reject malformed digests supplied by users before they are compared
//! against records.

use crate::error::{HubError, Result};
use oci_spec::image::Digest as OciDigest;
use std::fmt;
use std::str::FromStr;


/// A validated `algorithm:hex` content digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digest(OciDigest);

impl FromStr for Digest {
    type Err = HubError;

    fn from_str(s: &str) -> Result<Self> {
        let inner = OciDigest::from_str(s).map_err(|e| HubError::Validation {
            message: format!("invalid digest '{}': {}", s, e),
            source: Some(Box::new(e)),
        })?;
        Ok(Digest(inner))
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

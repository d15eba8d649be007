//! Comma-separated tag string rendering.
//!
//! Turns a previously saved JSON document shaped `{"tags": ["1.0", "latest"]}`
//! into `base:1.0,base:latest` for consumption by build pipelines.

use crate::error::{HubError, Result};
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

#[cfg(test)]
mod tests;

/// On-disk tag file shape.
#[derive(Debug, Deserialize)]
struct TagFile {
    tags: Vec<String>,
}

/// Joins `base_name:tag` pairs with commas, preserving tag order.
///
/// # Examples
///
/// ```
/// use libhubtag::csv::tag_strings;
///
/// let tags = vec!["1.0".to_string(), "latest".to_string()];
/// assert_eq!(tag_strings("acme/app", &tags), "acme/app:1.0,acme/app:latest");
/// ```
pub fn tag_strings(base_name: &str, tags: &[String]) -> String {
    tags.iter()
        .map(|tag| format!("{}:{}", base_name, tag))
        .collect::<Vec<_>>()
        .join(",")
}

/// Reads a `{"tags": [...]}` JSON file and renders the comma-separated list.
///
/// # Errors
///
/// Returns a not-found error when the file does not exist, and a validation
/// error when it cannot be read or parsed.
pub fn tag_strings_from_file(path: impl AsRef<Path>, base_name: &str) -> Result<String> {
    let path = path.as_ref();

    let contents = fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            HubError::not_found("tag file", path.display().to_string())
        } else {
            HubError::validation_with_source(
                format!("failed to read tag file {}", path.display()),
                e,
            )
        }
    })?;

    let file: TagFile = serde_json::from_str(&contents).map_err(|e| {
        HubError::validation_with_source(
            format!("failed to parse tag file {}", path.display()),
            e,
        )
    })?;

    Ok(tag_strings(base_name, &file.tags))
}

//! Display helpers for listing output.

use chrono::{DateTime, Utc};
use chrono_humanize::Humanize;
use humansize::{BINARY, format_size as humanize_size};


/// Renders a byte count with binary units.
///
/// # Examples
///
/// ```
/// use libhubtag::format::format_size;
///
/// assert_eq!(format_size(1024 * 1024 * 5), "5 MiB");
/// ```
pub fn format_size(bytes: u64) -> String {
    humanize_size(bytes, BINARY)
}

/// Renders a timestamp relative to now ("a day ago").
pub fn format_age(timestamp: &DateTime<Utc>) -> String {
    timestamp.humanize()
}

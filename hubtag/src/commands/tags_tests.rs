use super::*;
use chrono::{Duration, Utc};

fn full_record() -> TagRecord {
    serde_json::from_value(serde_json::json!({
        "name": "latest",
        "digest": "sha256:4abcf20661432fb2d719b4568d94db3b6cf9b44bf2a3e1c2c6d0c89fd9e6e0b2",
        "full_size": 5 * 1024 * 1024,
        "tag_status": "active"
    }))
    .unwrap()
}

#[test]
fn test_tag_row_shortens_digest() {
    let row = TagRow::from_record(&full_record());
    assert_eq!(row.digest, "sha256:4abcf2066143");
}

#[test]
fn test_tag_row_humanizes_size() {
    let row = TagRow::from_record(&full_record());
    assert_eq!(row.size, "5 MiB");
}

#[test]
fn test_tag_row_placeholders_for_missing_metadata() {
    let record: TagRecord = serde_json::from_str(r#"{"name": "orphan"}"#).unwrap();
    let row = TagRow::from_record(&record);
    assert_eq!(row.digest, "<none>");
    assert_eq!(row.size, "-");
    assert_eq!(row.pushed, "-");
}

#[test]
fn test_tag_row_humanizes_age() {
    let mut record = full_record();
    record.last_updated = Some(Utc::now() - Duration::days(1));
    let row = TagRow::from_record(&record);
    assert_eq!(row.pushed, "a day ago");
}

#[test]
fn test_short_digest_keeps_short_values_intact() {
    assert_eq!(short_digest("sha256:abc"), "sha256:abc");
}

#[test]
fn test_short_digest_handles_missing_algorithm() {
    assert_eq!(short_digest("justahexstring"), "justahexstring");
}

#[test]
fn test_digest_filter_argument_must_be_valid() {
    // The handler validates with Digest::from_str before any I/O.
    assert!(Digest::from_str("not a digest").is_err());
    assert!(
        Digest::from_str("sha256:4abcf20661432fb2d719b4568d94db3b6cf9b44bf2a3e1c2c6d0c89fd9e6e0b2")
            .is_ok()
    );
}

#[test]
fn test_records_filter_by_digest_keeps_order() {
    let records: Vec<TagRecord> = serde_json::from_str(
        r#"[
            {"name": "latest", "digest": "sha256:aaa"},
            {"name": "v2", "digest": "sha256:bbb"},
            {"name": "v1", "digest": "sha256:aaa"}
        ]"#,
    )
    .unwrap();

    let matching: Vec<&str> = records
        .iter()
        .filter(|record| record.digest.as_deref() == Some("sha256:aaa"))
        .map(|record| record.name.as_str())
        .collect();
    assert_eq!(matching, vec!["latest", "v1"]);
}

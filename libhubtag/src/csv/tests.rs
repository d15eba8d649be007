use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn tag_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_tag_strings_joins_with_commas() {
    let tags = vec!["1.0".to_string(), "latest".to_string()];
    assert_eq!(
        tag_strings("acme/app", &tags),
        "acme/app:1.0,acme/app:latest"
    );
}

#[test]
fn test_tag_strings_single_tag_has_no_comma() {
    let tags = vec!["latest".to_string()];
    assert_eq!(tag_strings("acme/app", &tags), "acme/app:latest");
}

#[test]
fn test_tag_strings_empty_input_is_empty_string() {
    assert_eq!(tag_strings("acme/app", &[]), "");
}

#[test]
fn test_tag_strings_preserves_order() {
    let tags = vec!["c".to_string(), "a".to_string(), "b".to_string()];
    assert_eq!(tag_strings("x", &tags), "x:c,x:a,x:b");
}

#[test]
fn test_tag_strings_from_file_happy_path() {
    let file = tag_file(r#"{"tags": ["1.0", "latest"]}"#);
    let joined = tag_strings_from_file(file.path(), "acme/app").unwrap();
    assert_eq!(joined, "acme/app:1.0,acme/app:latest");
}

#[test]
fn test_tag_strings_from_file_ignores_extra_fields() {
    let file = tag_file(r#"{"image": "acme/app", "tags": ["1.0"], "digest": "sha256:aaa"}"#);
    let joined = tag_strings_from_file(file.path(), "acme/app").unwrap();
    assert_eq!(joined, "acme/app:1.0");
}

#[test]
fn test_tag_strings_from_file_empty_tags() {
    let file = tag_file(r#"{"tags": []}"#);
    let joined = tag_strings_from_file(file.path(), "acme/app").unwrap();
    assert_eq!(joined, "");
}

#[test]
fn test_tag_strings_from_file_missing_file_is_not_found() {
    let err = tag_strings_from_file("/no/such/tagfile.json", "acme/app").unwrap_err();
    assert!(matches!(err, HubError::NotFound { .. }));
    assert!(err.to_string().contains("tagfile.json"));
}

#[test]
fn test_tag_strings_from_file_malformed_json_is_validation_error() {
    let file = tag_file("{not json at all");
    let err = tag_strings_from_file(file.path(), "acme/app").unwrap_err();
    assert!(matches!(err, HubError::Validation { .. }));
}

#[test]
fn test_tag_strings_from_file_wrong_shape_is_validation_error() {
    let file = tag_file(r#"{"tags": "not-a-list"}"#);
    let err = tag_strings_from_file(file.path(), "acme/app").unwrap_err();
    assert!(matches!(err, HubError::Validation { .. }));
}

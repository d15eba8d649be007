use super::*;
use crate::agent::{BrowserAgentPool, StaticUserAgent};

const TAGS_BODY: &str = r#"{
    "count": 3,
    "next": null,
    "previous": null,
    "results": [
        {"name": "latest", "digest": "sha256:aaa", "full_size": 1024},
        {"name": "v1", "digest": "sha256:aaa", "full_size": 1024},
        {"name": "v2", "digest": "sha256:bbb", "full_size": 2048}
    ]
}"#;

#[test]
fn test_client_new_with_valid_url() {
    assert!(HubClient::new("https://hub.docker.com").is_ok());
}

#[test]
fn test_client_defaults_to_https_scheme() {
    let client = HubClient::new("hub.docker.com").unwrap();
    assert_eq!(client.base_url(), "https://hub.docker.com");
}

#[test]
fn test_client_keeps_explicit_http_scheme() {
    let client = HubClient::new("http://localhost:8080").unwrap();
    assert_eq!(client.base_url(), "http://localhost:8080");
}

#[test]
fn test_client_removes_trailing_slashes() {
    let client = HubClient::new("https://hub.docker.com///").unwrap();
    assert_eq!(client.base_url(), "https://hub.docker.com");
}

#[test]
fn test_client_rejects_empty_url() {
    let client = HubClient::new("");
    assert!(matches!(client.unwrap_err(), HubError::Config { .. }));
}

#[test]
fn test_client_rejects_whitespace_url() {
    assert!(HubClient::new("   ").is_err());
}

#[test]
fn test_tags_url_embeds_repository_and_page_size() {
    let client = HubClient::new("https://hub.docker.com").unwrap();
    let url = client.tags_url("library/telegraf", 25);
    assert_eq!(
        url,
        "https://hub.docker.com/v2/repositories/library/telegraf/tags?page_size=25"
    );
}

#[test]
fn test_tags_url_embeds_every_positive_page_size() {
    let client = HubClient::new("https://hub.docker.com").unwrap();
    for page_size in [1u32, 7, 10, 100, 4096] {
        let url = client.tags_url("acme/app", page_size);
        assert!(url.ends_with(&format!("page_size={}", page_size)));
    }
}

#[tokio::test]
async fn test_fetch_tags_rejects_zero_page_size() {
    let client = HubClient::new("https://hub.docker.com").unwrap();
    let err = client.fetch_tags("library/telegraf", 0).await.unwrap_err();
    assert!(matches!(err, HubError::Validation { .. }));
}

#[tokio::test]
async fn test_fetch_tags_rejects_empty_repository() {
    let client = HubClient::new("https://hub.docker.com").unwrap();
    let err = client.fetch_tags("", 10).await.unwrap_err();
    assert!(matches!(err, HubError::Validation { .. }));
}

#[tokio::test]
async fn test_fetch_tags_parses_results_in_order() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v2/repositories/library/telegraf/tags")
        .match_query(mockito::Matcher::UrlEncoded(
            "page_size".into(),
            "10".into(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(TAGS_BODY)
        .create_async()
        .await;

    let client = HubClient::new(&server.url()).unwrap();
    let records = client.fetch_tags("library/telegraf", 10).await.unwrap();

    mock.assert_async().await;
    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["latest", "v1", "v2"]);
    assert_eq!(records[0].digest.as_deref(), Some("sha256:aaa"));
}

#[tokio::test]
async fn test_fetch_tags_sends_requested_page_size() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v2/repositories/acme/app/tags")
        .match_query(mockito::Matcher::UrlEncoded(
            "page_size".into(),
            "50".into(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"results": []}"#)
        .create_async()
        .await;

    let client = HubClient::new(&server.url()).unwrap();
    let records = client.fetch_tags("acme/app", 50).await.unwrap();

    mock.assert_async().await;
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_fetch_tags_sends_static_user_agent() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v2/repositories/library/telegraf/tags")
        .match_query(mockito::Matcher::Any)
        .match_header("user-agent", "hubtag-test/1.0")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"results": []}"#)
        .create_async()
        .await;

    let client = HubClient::new(&server.url())
        .unwrap()
        .with_agent(Arc::new(StaticUserAgent::new("hubtag-test/1.0")));
    client.fetch_tags("library/telegraf", 10).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_tags_sends_pooled_browser_agent() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v2/repositories/library/telegraf/tags")
        .match_query(mockito::Matcher::Any)
        .match_header("user-agent", "spoofed-browser/9.9")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"results": []}"#)
        .create_async()
        .await;

    let pool = BrowserAgentPool::new(vec!["spoofed-browser/9.9".to_string()]);
    let client = HubClient::new(&server.url())
        .unwrap()
        .with_agent(Arc::new(pool));
    client.fetch_tags("library/telegraf", 10).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_tags_malformed_body_is_validation_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v2/repositories/library/telegraf/tags")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{not json")
        .create_async()
        .await;

    let client = HubClient::new(&server.url()).unwrap();
    let err = client.fetch_tags("library/telegraf", 10).await.unwrap_err();
    assert!(matches!(err, HubError::Validation { .. }));
}

#[tokio::test]
async fn test_fetch_tags_404_is_not_found() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v2/repositories/acme/ghost/tags")
        .match_query(mockito::Matcher::Any)
        .with_status(404)
        .with_body(r#"{"detail": "object not found"}"#)
        .create_async()
        .await;

    let client = HubClient::new(&server.url()).unwrap();
    let err = client.fetch_tags("acme/ghost", 10).await.unwrap_err();
    assert!(matches!(err, HubError::NotFound { .. }));
    assert!(err.to_string().contains("acme/ghost"));
}

#[tokio::test]
async fn test_fetch_tags_401_is_authentication_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v2/repositories/acme/private/tags")
        .match_query(mockito::Matcher::Any)
        .with_status(401)
        .with_body(r#"{"detail": "authentication required"}"#)
        .create_async()
        .await;

    let client = HubClient::new(&server.url()).unwrap();
    let err = client.fetch_tags("acme/private", 10).await.unwrap_err();
    assert!(matches!(
        err,
        HubError::Authentication {
            status: Some(401),
            ..
        }
    ));
}

#[tokio::test]
async fn test_fetch_tags_429_is_rate_limit() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v2/repositories/library/telegraf/tags")
        .match_query(mockito::Matcher::Any)
        .with_status(429)
        .create_async()
        .await;

    let client = HubClient::new(&server.url()).unwrap();
    let err = client.fetch_tags("library/telegraf", 10).await.unwrap_err();
    assert!(matches!(err, HubError::RateLimit { .. }));
}

#[tokio::test]
async fn test_fetch_tags_500_is_server_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v2/repositories/library/telegraf/tags")
        .match_query(mockito::Matcher::Any)
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let client = HubClient::new(&server.url()).unwrap();
    let err = client.fetch_tags("library/telegraf", 10).await.unwrap_err();
    assert!(matches!(err, HubError::Server { status: 500, .. }));
}

#[tokio::test]
async fn test_fetch_tags_connection_refused_is_network_error() {
    // Port 1 is never listening.
    let client = HubClient::new("http://127.0.0.1:1").unwrap();
    let err = client.fetch_tags("library/telegraf", 10).await.unwrap_err();
    assert!(matches!(err, HubError::Network { .. }));
}

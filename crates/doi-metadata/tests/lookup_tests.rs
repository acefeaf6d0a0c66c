//! Tests for resolving DOIs pasted as free text.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use doi_metadata::config::Config;
use doi_metadata::doi::{escape_path_segment, resolver_url};
use doi_metadata::lookup::{NO_DOIS_FOUND, lookup_text};

fn work_path(doi: &str) -> String {
    format!("/works/{}", escape_path_segment(&resolver_url(doi)))
}

#[tokio::test]
async fn test_lookup_without_dois_fails_before_any_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = Config::for_testing(&mock_server.uri());
    let err = lookup_text(&config, "nothing to see here, 10.12 either").await.unwrap_err();

    assert_eq!(err.to_string(), NO_DOIS_FOUND);
}

#[tokio::test]
async fn test_lookup_dedupes_and_resolves_in_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(work_path("10.1000/a")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"title": "First"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(work_path("10.1000/b")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"title": "Second"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = Config::for_testing(&mock_server.uri());
    let text = "https://doi.org/10.1000/a (doi:10.1000/b), 10.1000/a";
    let response = lookup_text(&config, text).await.unwrap();

    let titles: Vec<&str> = response.papers.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["First", "Second"]);
}

#[tokio::test]
async fn test_lookup_skips_unresolved_dois() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = Config::for_testing(&mock_server.uri());
    let response = lookup_text(&config, "10.1000/missing").await.unwrap();

    assert!(response.papers.is_empty());
}

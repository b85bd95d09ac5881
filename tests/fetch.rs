//! HTTP-level tests for the fetch half of the pipeline, against a local
//! mock server. The list-URL check is a substring match, so mock paths
//! carry the `imdb.com/list/` marker.

use imdb_list_scraper::{load_list_items, ListParams, ScrapeError};
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn list_url(server: &MockServer) -> String {
    format!("{}/imdb.com/list/ls0001", server.uri())
}

#[tokio::test]
async fn fetch_and_extract_end_to_end() {
    let server = MockServer::start().await;
    let body = std::fs::read_to_string("tests/fixtures/list_page.html").unwrap();

    Mock::given(method("GET"))
        .and(path("/imdb.com/list/ls0001"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let items = load_list_items(&ListParams { url: list_url(&server) })
        .await
        .unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, "tt0111161");
    assert_eq!(items[0].year, "1994");
    assert_eq!(items[1].id, "tt0068646");
    assert_eq!(items[1].year, "");
    assert_eq!(items[1].image, "");
}

#[tokio::test]
async fn empty_page_yields_no_items() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/imdb.com/list/ls0001"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body></body></html>"))
        .mount(&server)
        .await;

    let items = load_list_items(&ListParams { url: list_url(&server) })
        .await
        .unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn non_success_status_carries_the_code() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/imdb.com/list/ls0001"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;

    let err = load_list_items(&ListParams { url: list_url(&server) })
        .await
        .unwrap_err();
    match err {
        ScrapeError::Status { status } => assert_eq!(status, 404),
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn invalid_url_is_rejected_before_any_request() {
    let server = MockServer::start().await;

    // No request must ever reach the server.
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let url = format!("{}/lists/ls0001", server.uri());
    let err = load_list_items(&ListParams { url }).await.unwrap_err();
    assert!(matches!(err, ScrapeError::InvalidUrl(_)));
}

#[tokio::test]
async fn transport_failure_is_a_network_error() {
    // Nothing listens on port 1.
    let url = "http://127.0.0.1:1/imdb.com/list/ls0001".to_string();
    let err = load_list_items(&ListParams { url }).await.unwrap_err();
    assert!(matches!(err, ScrapeError::Network(_)));
}

mod support;

use std::time::Duration;

use catalog_engine::{FailureKind, FetchSettings, PageFetcher, ReqwestPageFetcher};
use pretty_assertions::assert_eq;
use support::{init_logging, mount_page};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fetcher_for(server: &MockServer) -> ReqwestPageFetcher {
    let settings = FetchSettings {
        base_url: server.uri(),
        ..FetchSettings::default()
    };
    ReqwestPageFetcher::new(settings).expect("client")
}

#[tokio::test]
async fn fetcher_returns_records_and_total() {
    init_logging();
    let server = MockServer::start().await;
    mount_page(&server, 2, 12, 100).await;

    let page = fetcher_for(&server).fetch_page(2, 12).await.expect("fetch ok");

    assert_eq!(page.total, 100);
    assert_eq!(page.records.len(), 12);
    let ids: Vec<u64> = page.records.iter().map(|record| record.id).collect();
    assert_eq!(ids, (13..=24).collect::<Vec<_>>());
    let first = &page.records[0];
    assert_eq!(first.title, "Artwork 13");
    assert_eq!(first.place_of_origin.as_deref(), Some("France"));
    assert_eq!(first.inscriptions, None);
    assert_eq!(first.date_start, Some(1890));
    assert_eq!(first.date_end, Some(1891));
}

#[test]
fn page_url_carries_page_and_limit() {
    let fetcher = ReqwestPageFetcher::new(FetchSettings {
        base_url: "https://api.example.org/api/v1/".to_string(),
        ..FetchSettings::default()
    })
    .expect("client");

    let url = fetcher.page_url(3, 24).expect("url");
    assert_eq!(
        url.as_str(),
        "https://api.example.org/api/v1/artworks?page=3&limit=24"
    );
}

#[tokio::test]
async fn fetcher_rejects_zero_page_without_request() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = fetcher_for(&server).fetch_page(0, 12).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidRequest);
}

#[tokio::test]
async fn fetcher_fails_on_http_status() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/artworks"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = fetcher_for(&server).fetch_page(1, 12).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(503));
}

#[tokio::test]
async fn fetcher_fails_on_malformed_body() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/artworks"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{\"data\": [", "application/json"))
        .mount(&server)
        .await;

    let err = fetcher_for(&server).fetch_page(1, 12).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn fetcher_rejects_non_json_content() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/artworks"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html></html>", "text/html"))
        .mount(&server)
        .await;

    let err = fetcher_for(&server).fetch_page(1, 12).await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::UnsupportedContentType {
            content_type: "text/html".to_string()
        }
    );
}

#[tokio::test]
async fn fetcher_times_out_on_slow_response() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/artworks"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(support::page_body(1, 12, 100)),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        base_url: server.uri(),
        request_timeout: Duration::from_millis(50),
        ..FetchSettings::default()
    };
    let fetcher = ReqwestPageFetcher::new(settings).expect("client");

    let err = fetcher.fetch_page(1, 12).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn fetcher_rejects_too_large_response() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/artworks"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(
                "{\"data\":[],\"pagination\":{\"total\":0}}",
                "application/json",
            ),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        base_url: server.uri(),
        max_bytes: 10,
        ..FetchSettings::default()
    };
    let fetcher = ReqwestPageFetcher::new(settings).expect("client");

    let err = fetcher.fetch_page(1, 12).await.unwrap_err();
    assert!(matches!(
        err.kind,
        FailureKind::TooLarge { max_bytes: 10, .. }
    ));
}

mod support;

use trx_tracker::adapter::outbound::trongrid::client::{TronGridClient, UNSUCCESSFUL_REASON};
use trx_tracker::error::Error;
use trx_tracker::port::outbound::source::TransactionSource;
use trx_tracker::testkit::record;

use support::http::CannedServer;

fn listing_body() -> String {
    record::response_body(vec![
        record::transfer("a", "TA", "TB", 1),
        record::transfer("b", "TA", "TB", 2),
    ])
    .to_string()
}

#[tokio::test]
async fn fetch_returns_records_and_sends_api_key() {
    let server = CannedServer::start(200, &listing_body()).await;
    let client = TronGridClient::new(server.base_url.clone(), Some("grid-secret".into()));

    let records = client.fetch("TAddr", 3).await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["txID"], "a");
    let request = server.request().await;
    assert!(request.starts_with("get /v1/accounts/taddr/transactions?limit=3 "));
    assert!(request.contains("tron-pro-api-key: grid-secret"));
}

#[tokio::test]
async fn fetch_without_key_omits_header() {
    let server = CannedServer::start(200, &listing_body()).await;
    let client = TronGridClient::new(server.base_url.clone(), None);

    client.fetch("TAddr", 10).await.unwrap();

    assert!(!server.request().await.contains("tron-pro-api-key"));
}

#[tokio::test]
async fn non_success_status_is_source_unavailable_with_truncated_body() {
    let body = "e".repeat(500);
    let server = CannedServer::start(503, &body).await;
    let client = TronGridClient::new(server.base_url.clone(), None);

    let err = client.fetch("TAddr", 10).await.unwrap_err();

    match err {
        Error::SourceUnavailable { status, reason } => {
            assert_eq!(status, 503);
            assert_eq!(reason.len(), 203);
            assert!(reason.ends_with("..."));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn unsuccessful_body_is_source_unavailable() {
    let server = CannedServer::start(200, r#"{"success": false, "error": "rate limited"}"#).await;
    let client = TronGridClient::new(server.base_url.clone(), None);

    let err = client.fetch("TAddr", 10).await.unwrap_err();

    assert!(matches!(
        err,
        Error::SourceUnavailable { status: 200, ref reason } if reason == "rate limited"
    ));
}

#[tokio::test]
async fn unsuccessful_body_without_error_uses_default_reason() {
    let server = CannedServer::start(200, r#"{"success": false}"#).await;
    let client = TronGridClient::new(server.base_url.clone(), None);

    let err = client.fetch("TAddr", 10).await.unwrap_err();

    assert!(matches!(
        err,
        Error::SourceUnavailable { ref reason, .. } if reason == UNSUCCESSFUL_REASON
    ));
}

#[tokio::test]
async fn malformed_json_body_is_an_http_error() {
    let server = CannedServer::start(200, "{not json").await;
    let client = TronGridClient::new(server.base_url.clone(), None);

    let err = client.fetch("TAddr", 10).await.unwrap_err();

    assert!(matches!(err, Error::Http(ref e) if e.is_decode()));
}

//! Mapping of failed exchanges to error kinds.

mod support;

use std::sync::Arc;
use std::time::{Duration, Instant};

use regraph::execution::{HttpTransport, HttpTransportRequest, HttpTransportResponse};
use regraph::prelude::*;
use serde_json::json;
use support::client_for;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn status_error(status: u16, body: ResponseTemplate) -> RegraphError {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(body)
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).status().get().await.unwrap_err();
    assert_eq!(err.status_code(), Some(status));
    err
}

#[tokio::test]
async fn test_error_envelope_message_and_status() {
    for status in [400u16, 401, 403, 404, 429, 500, 503] {
        let err = status_error(
            status,
            ResponseTemplate::new(status).set_body_json(json!({"error": "X"})),
        )
        .await;

        let RegraphError::Api(api) = err else {
            panic!("expected API error for {status}");
        };
        assert_eq!(api.message, "X");
        assert_eq!(api.status_code, status);
        assert_eq!(api.is_bad_request_error(), status == 400);
        assert_eq!(api.is_authentication_error(), status == 401);
        assert_eq!(api.is_not_found_error(), status == 404);
        assert_eq!(api.is_rate_limit_error(), status == 429);
    }
}

#[tokio::test]
async fn test_non_json_error_body_is_kept_verbatim() {
    let raw = "upstream connect error or disconnect/reset before headers";
    let err = status_error(502, ResponseTemplate::new(502).set_body_string(raw)).await;
    assert_eq!(err.api_error().unwrap().message, raw);
}

#[tokio::test]
async fn test_empty_error_body() {
    let err = status_error(404, ResponseTemplate::new(404)).await;
    let api = err.api_error().unwrap();
    assert_eq!(api.message, "");
    assert!(api.is_not_found_error());
}

#[tokio::test]
async fn test_mismatched_success_body_is_malformed_response() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/devices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"devices": "nope"})))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).devices().list().await.unwrap_err();
    assert!(matches!(err, RegraphError::MalformedResponse(_)));
    assert_eq!(err.status_code(), None);
}

#[tokio::test]
async fn test_connection_failure_is_transport_error() {
    let client = Client::builder()
        .api_key("k")
        .base_url("http://127.0.0.1:1/v1")
        .build()
        .unwrap();

    let err = client.status().get().await.unwrap_err();
    assert!(matches!(err, RegraphError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn test_timeout_is_reported_as_timeout() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&mock_server)
        .await;

    let client = Client::builder()
        .api_key("k")
        .base_url(mock_server.uri())
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    let err = client.status().get().await.unwrap_err();
    assert!(err.is_timeout(), "got {err:?}");
}

struct SlowTransport;

#[async_trait::async_trait]
impl HttpTransport for SlowTransport {
    async fn send(&self, _request: HttpTransportRequest) -> regraph::Result<HttpTransportResponse> {
        tokio::time::sleep(Duration::from_secs(2)).await;
        Ok(HttpTransportResponse {
            status: 200,
            body: br#"{"devices":[]}"#.to_vec(),
        })
    }
}

#[tokio::test]
async fn test_timeout_applies_to_custom_transport() {
    let client = Client::builder()
        .api_key("k")
        .base_url("http://regraph.test/v1")
        .timeout(Duration::from_millis(100))
        .transport(Arc::new(SlowTransport))
        .build()
        .unwrap();

    let started = Instant::now();
    let err = client.devices().list().await.unwrap_err();
    assert!(err.is_timeout(), "got {err:?}");
    assert!(started.elapsed() < Duration::from_secs(1));
}

#[tokio::test]
async fn test_non_utf8_error_body_bytes_are_kept() {
    let err = status_error(502, ResponseTemplate::new(502).set_body_bytes(vec![0xff, b'A'])).await;
    let api = err.api_error().unwrap();
    assert_eq!(api.body, [0xff, b'A']);
    assert_eq!(api.status_code, 502);
}

#[tokio::test]
async fn test_empty_id_never_hits_the_network() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).batch().get("").await.unwrap_err();
    assert!(matches!(err, RegraphError::InvalidParameter(_)));
}

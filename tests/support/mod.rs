//! Shared helpers for integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use regraph::Client;
use regraph::execution::{HttpTransport, HttpTransportRequest, HttpTransportResponse};
use wiremock::MockServer;

pub const API_KEY: &str = "test-api-key";

/// Client pointed at a wiremock server.
pub fn client_for(server: &MockServer) -> Client {
    Client::builder()
        .api_key(API_KEY)
        .base_url(server.uri())
        .build()
        .expect("client should build")
}

/// Transport that records every request and answers with a canned response.
///
/// Clones share the same request log.
#[derive(Clone)]
pub struct RecordingTransport {
    requests: Arc<Mutex<Vec<HttpTransportRequest>>>,
    status: u16,
    body: Vec<u8>,
}

impl RecordingTransport {
    pub fn responding(status: u16, body: serde_json::Value) -> Self {
        Self {
            requests: Arc::default(),
            status,
            body: serde_json::to_vec(&body).unwrap(),
        }
    }

    pub fn client(&self) -> Client {
        Client::builder()
            .api_key(API_KEY)
            .base_url("http://regraph.test/v1")
            .transport(Arc::new(self.clone()))
            .build()
            .expect("client should build")
    }

    pub fn requests(&self) -> Vec<HttpTransportRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// JSON body of the only request sent so far.
    pub fn sent_json(&self) -> serde_json::Value {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        serde_json::from_slice(&requests[0].body).expect("request body should be JSON")
    }
}

#[async_trait::async_trait]
impl HttpTransport for RecordingTransport {
    async fn send(&self, request: HttpTransportRequest) -> regraph::Result<HttpTransportResponse> {
        self.requests.lock().unwrap().push(request);
        Ok(HttpTransportResponse {
            status: self.status,
            body: self.body.clone(),
        })
    }
}

//! HTTP transport abstraction.
//!
//! The client never talks to `reqwest` directly: every call goes through an
//! [`HttpTransport`], which receives the fully built request and returns the
//! raw status and body. Tests and embedders can install their own transport
//! with [`ClientBuilder::transport`](crate::ClientBuilder::transport).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Method, Url};

use crate::error::Result;

/// A request ready to be put on the wire.
#[derive(Debug, Clone)]
pub struct HttpTransportRequest {
    pub method: Method,
    pub url: Url,
    /// Includes `Authorization` (marked sensitive) and `Content-Type`.
    pub headers: HeaderMap,
    /// JSON document, or empty when the call carries no body.
    pub body: Vec<u8>,
    /// Deadline for the whole exchange.
    pub timeout: Duration,
}

/// Raw response data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpTransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Performs one HTTP round trip.
///
/// Implementations must not retry and must not interpret the status code;
/// a `4xx`/`5xx` answer is still `Ok`. Errors are reserved for failures
/// below HTTP (DNS, connect, timeout, I/O).
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpTransportRequest) -> Result<HttpTransportResponse>;
}

/// Default transport backed by a `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpTransportRequest) -> Result<HttpTransportResponse> {
        let response = self
            .client
            .request(request.method, request.url)
            .headers(request.headers)
            .timeout(request.timeout)
            .body(request.body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        Ok(HttpTransportResponse { status, body })
    }
}

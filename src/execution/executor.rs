//! Request execution (transport core).
//!
//! One call is one round trip: build the URL, encode the body, attach the
//! bearer token, send, then either turn a `>= 400` answer into an
//! [`ApiError`] or hand the body back for decoding. Nothing is retried or
//! cached.

use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Method, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

use super::transport::{HttpTransport, HttpTransportRequest};
use crate::defaults;
use crate::error::{ApiError, RegraphError, Result};

/// Shared, read-only state behind every call.
pub(crate) struct HttpExecutor {
    base_url: String,
    api_key: SecretString,
    timeout: Duration,
    transport: Arc<dyn HttpTransport>,
}

impl HttpExecutor {
    pub(crate) fn new(
        base_url: String,
        api_key: SecretString,
        timeout: Duration,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            base_url,
            api_key,
            timeout,
            transport,
        }
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Join base URL and path, then append query parameters in order.
    pub(crate) fn build_url(&self, path: &str, query: &[(&str, String)]) -> Result<Url> {
        let raw = format!("{}{}", self.base_url, path);
        let mut url = Url::parse(&raw).map_err(|e| RegraphError::InvalidUrl(format!("{raw}: {e}")))?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    pub(crate) fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, bearer(&self.api_key)?);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(defaults::http::USER_AGENT));
        Ok(headers)
    }

    /// Perform one exchange and return the body of a successful response.
    pub(crate) async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
        query: &[(&str, String)],
        cancel: Option<&CancellationToken>,
    ) -> Result<Vec<u8>> {
        let request = HttpTransportRequest {
            method: method.clone(),
            url: self.build_url(path, query)?,
            headers: self.headers()?,
            body: body.unwrap_or_default(),
            timeout: self.timeout,
        };

        if cancel.is_some_and(CancellationToken::is_cancelled) {
            return Err(RegraphError::Cancelled);
        }

        tracing::debug!(%method, path, "sending request");
        let started = Instant::now();
        // Applies to custom transports too.
        let send = tokio::time::timeout(self.timeout, self.transport.send(request));
        let sent = match cancel {
            Some(token) => tokio::select! {
                biased;
                _ = token.cancelled() => return Err(RegraphError::Cancelled),
                res = send => res,
            },
            None => send.await,
        };
        let response = sent.map_err(|elapsed| RegraphError::Timeout(Box::new(elapsed)))??;
        tracing::debug!(
            %method,
            path,
            status = response.status,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "received response"
        );

        if response.status >= 400 {
            return Err(ApiError::from_response(response.status, &response.body).into());
        }
        Ok(response.body)
    }
}

/// `Authorization: Bearer <key>`, flagged so it never shows up in `Debug`.
pub(crate) fn bearer(api_key: &SecretString) -> Result<HeaderValue> {
    let mut value = HeaderValue::from_str(&format!("Bearer {}", api_key.expose_secret()))
        .map_err(|_| {
            RegraphError::Configuration(
                "API key contains characters that are not valid in an HTTP header".to_string(),
            )
        })?;
    value.set_sensitive(true);
    Ok(value)
}

pub(crate) fn encode<B: Serialize + ?Sized>(body: &B) -> Result<Vec<u8>> {
    serde_json::to_vec(body).map_err(RegraphError::Encode)
}

pub(crate) fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(RegraphError::MalformedResponse)
}

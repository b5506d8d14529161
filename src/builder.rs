//! Client builder
//!
//! All configuration is fixed here; a built [`Client`] cannot be
//! reconfigured.

use std::sync::Arc;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::client::Client;
use crate::defaults;
use crate::error::{RegraphError, Result};
use crate::execution::executor::{HttpExecutor, bearer};
use crate::execution::{HttpTransport, ReqwestTransport};

/// Builder for [`Client`].
///
/// ```rust,ignore
/// let client = Client::builder()
///     .api_key("sk-...")
///     .timeout(Duration::from_secs(120))
///     .build()?;
/// ```
#[derive(Clone, Default)]
pub struct ClientBuilder {
    api_key: Option<SecretString>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    http_client: Option<reqwest::Client>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key
    pub fn api_key<S: Into<String>>(mut self, api_key: S) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    /// Read the API key from `REGRAPH_API_KEY`, if set and no key was given.
    pub fn api_key_from_env(mut self) -> Self {
        if self.api_key.is_none()
            && let Ok(key) = std::env::var(defaults::API_KEY_ENV)
        {
            self.api_key = Some(SecretString::from(key));
        }
        self
    }

    /// Override the API base URL (e.g. a staging deployment or a mock server).
    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set connection timeout; only used when the builder creates the HTTP client.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Set custom HTTP client
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Replace the HTTP transport entirely. Takes precedence over
    /// [`with_http_client`](Self::with_http_client).
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<Client> {
        let api_key = self
            .api_key
            .filter(|k| !k.expose_secret().trim().is_empty())
            .ok_or_else(|| RegraphError::Configuration("API key is required".to_string()))?;
        // Fail at construction rather than on the first call.
        bearer(&api_key)?;

        let base_url = self
            .base_url
            .unwrap_or_else(|| defaults::BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        reqwest::Url::parse(&base_url).map_err(|e| {
            RegraphError::Configuration(format!("invalid base URL {base_url:?}: {e}"))
        })?;

        let timeout = self.timeout.unwrap_or(defaults::http::REQUEST_TIMEOUT);

        let transport: Arc<dyn HttpTransport> = match (self.transport, self.http_client) {
            (Some(transport), _) => transport,
            (None, Some(client)) => Arc::new(ReqwestTransport::new(client)),
            (None, None) => {
                let client = reqwest::Client::builder()
                    .connect_timeout(
                        self.connect_timeout
                            .unwrap_or(defaults::http::CONNECT_TIMEOUT),
                    )
                    .timeout(timeout)
                    .build()
                    .map_err(|e| {
                        RegraphError::Configuration(format!("failed to build HTTP client: {e}"))
                    })?;
                Arc::new(ReqwestTransport::new(client))
            }
        };

        Ok(Client::from_executor(HttpExecutor::new(
            base_url, api_key, timeout, transport,
        )))
    }
}

impl std::fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("custom_transport", &self.transport.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply() {
        let client = ClientBuilder::new().api_key("sk-test").build().unwrap();
        assert_eq!(client.base_url(), defaults::BASE_URL);
        assert_eq!(client.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn overrides_apply_and_trailing_slash_is_trimmed() {
        let client = ClientBuilder::new()
            .api_key("sk-test")
            .base_url("http://localhost:8080/v1/")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/v1");
        assert_eq!(client.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn missing_or_blank_key_is_rejected() {
        for builder in [ClientBuilder::new(), ClientBuilder::new().api_key("  ")] {
            let err = builder.build().unwrap_err();
            assert!(matches!(err, RegraphError::Configuration(_)));
        }
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = ClientBuilder::new()
            .api_key("sk-test")
            .base_url("::nope::")
            .build()
            .unwrap_err();
        assert!(matches!(err, RegraphError::Configuration(_)));
    }

    #[test]
    fn debug_redacts_key() {
        let builder = ClientBuilder::new().api_key("sk-very-secret");
        assert!(!format!("{builder:?}").contains("sk-very-secret"));
    }
}

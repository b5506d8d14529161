//! Error Handling Module
//!
//! Two families of failure surface from the client:
//! - [`ApiError`]: the server answered with a status code `>= 400`.
//! - Everything else on [`RegraphError`]: URL building, JSON encoding and
//!   decoding, transport failures, timeouts and cancellation.
//!
//! # Example
//!
//! ```rust,ignore
//! use regraph::error::RegraphError;
//!
//! match client.models().list(None).await {
//!     Err(RegraphError::Api(e)) if e.is_rate_limit_error() => { /* back off */ }
//!     Err(e) => return Err(e.into()),
//!     Ok(models) => println!("{} models", models.total),
//! }
//! ```

use serde::Deserialize;
use thiserror::Error;

/// Boxed error used to carry the underlying cause of transport failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type for all client operations.
pub type Result<T> = std::result::Result<T, RegraphError>;

/// A non-2xx response returned by the ReGraph API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("regraph: {message} (status {status_code})")]
pub struct ApiError {
    /// Message from the `error` field of the response body, or the raw body
    /// when it is not an error envelope. Invalid UTF-8 is replaced with
    /// `U+FFFD`; [`body`](Self::body) keeps the exact bytes.
    pub message: String,
    /// HTTP status code of the response.
    pub status_code: u16,
    /// Response body exactly as received.
    pub body: Vec<u8>,
}

/// Wire shape of an error body: `{"error": "<message>"}`.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: String,
}

impl ApiError {
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code,
            body: Vec::new(),
        }
    }

    /// Build an error from a failed response body.
    ///
    /// The message is taken from the `error` field when the body is an error
    /// envelope; otherwise the raw body is used verbatim.
    pub fn from_response(status_code: u16, body: &[u8]) -> Self {
        let message = match serde_json::from_slice::<ErrorEnvelope>(body) {
            Ok(envelope) => envelope.error,
            Err(_) => String::from_utf8_lossy(body).into_owned(),
        };
        Self {
            body: body.to_vec(),
            ..Self::new(status_code, message)
        }
    }

    /// 401 Unauthorized.
    pub const fn is_authentication_error(&self) -> bool {
        self.status_code == 401
    }

    /// 429 Too Many Requests.
    pub const fn is_rate_limit_error(&self) -> bool {
        self.status_code == 429
    }

    /// 404 Not Found.
    pub const fn is_not_found_error(&self) -> bool {
        self.status_code == 404
    }

    /// 400 Bad Request.
    pub const fn is_bad_request_error(&self) -> bool {
        self.status_code == 400
    }
}

/// Errors produced by the ReGraph client.
#[derive(Debug, Error)]
pub enum RegraphError {
    /// The API answered with a status code `>= 400`.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The request URL could not be built from the base URL and path.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request body could not be serialized to JSON.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// A successful response body did not match the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    /// The configured request timeout elapsed.
    #[error("request timed out: {0}")]
    Timeout(#[source] BoxError),

    /// DNS, connection or I/O failure below the HTTP layer.
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// The caller's cancellation token fired before the call completed.
    #[error("request cancelled")]
    Cancelled,

    /// Invalid client configuration (e.g. missing API key).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// An argument cannot be turned into a request (e.g. empty id).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl RegraphError {
    /// Returns the API error when the server rejected the call.
    pub const fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }

    /// HTTP status code, when the failure came from the API.
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api(e) => Some(e.status_code),
            _ => None,
        }
    }

    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}

impl From<reqwest::Error> for RegraphError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(Box::new(err))
        } else if err.is_builder() {
            Self::InvalidUrl(err.to_string())
        } else {
            Self::Transport(Box::new(err))
        }
    }
}

//! Default Configuration Values
//!
//! Client configuration defaults and the values substituted into requests
//! whose optional fields the API expects to be present.

use std::time::Duration;

/// Production API endpoint.
pub const BASE_URL: &str = "https://api.regraph.tech/v1";

/// Environment variable read by [`ClientBuilder::api_key_from_env`](crate::ClientBuilder::api_key_from_env).
pub const API_KEY_ENV: &str = "REGRAPH_API_KEY";

/// HTTP client default configurations
pub mod http {
    use super::*;

    /// Default request timeout for HTTP requests
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

    /// Default connection timeout for establishing HTTP connections
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Default User-Agent string for HTTP requests
    pub const USER_AGENT: &str = concat!("regraph-rust/", env!("CARGO_PKG_VERSION"));
}

/// Image generation defaults
pub mod images {
    pub const MODEL: &str = "dall-e-3";
}

/// Text-to-speech defaults
pub mod audio {
    pub const MODEL: &str = "tts-1";
    pub const VOICE: &str = "alloy";
    pub const RESPONSE_FORMAT: &str = "mp3";
    pub const SPEED: f64 = 1.0;
}

/// Hardware rental defaults
pub mod hardware {
    pub const GPU_COUNT: u32 = 1;
    pub const DURATION_HOURS: u32 = 1;
}

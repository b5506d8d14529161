//! # regraph - ReGraph API client
//!
//! Typed async client for the ReGraph decentralized AI compute marketplace:
//! chat completions, embeddings, image and speech generation, the model
//! catalog, fine-tuning and batch jobs, usage and billing, devices, provider
//! earnings and GPU rental.
//!
#![deny(unsafe_code)]

//! ## Features
//!
//! - **One call, one round trip**: no retries, caching or hidden background work.
//! - **Typed errors**: API failures carry the server message and status code,
//!   with predicates for the common cases.
//! - **Cancellation**: calls made through [`Client::with_cancellation`] abort
//!   when the token fires.
//! - **HTTP Customization**: bring your own `reqwest::Client` or a whole
//!   [`HttpTransport`](execution::HttpTransport).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use regraph::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new("your-api-key")?;
//!
//!     let response = client
//!         .chat()
//!         .completions()
//!         .create(ChatCompletionRequest::new(
//!             "gpt-5",
//!             vec![ChatMessage::user("Hello!")],
//!         ))
//!         .await?;
//!     println!("{}", response.content().unwrap_or_default());
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod client;
pub mod defaults;
pub mod error;
pub mod execution;
pub mod services;
pub mod types;

pub use builder::ClientBuilder;
pub use client::Client;
pub use error::{ApiError, RegraphError, Result};
pub use tokio_util::sync::CancellationToken;

/// Common imports.
pub mod prelude {
    pub use crate::CancellationToken;
    pub use crate::builder::ClientBuilder;
    pub use crate::client::Client;
    pub use crate::error::{ApiError, RegraphError};
    pub use crate::types::*;
}

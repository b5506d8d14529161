//! HTTP execution layer
//!
//! The injectable [`HttpTransport`] performs the network exchange; the
//! [`executor`] builds requests for it and decodes what comes back.

pub mod executor;
pub mod transport;

pub use transport::{HttpTransport, HttpTransportRequest, HttpTransportResponse, ReqwestTransport};

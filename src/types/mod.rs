//! Request and response records for every endpoint family.
//!
//! Response records are only ever produced by decoding the server's JSON;
//! request records are built by the caller and consumed on submission.

pub mod audio;
pub mod batch;
pub mod chat;
pub mod common;
pub mod devices;
pub mod embeddings;
pub mod hardware;
pub mod images;
pub mod inference;
pub mod models;
pub mod provider;
pub mod status;
pub mod training;
pub mod usage;

pub use audio::*;
pub use batch::*;
pub use chat::*;
pub use common::*;
pub use devices::*;
pub use embeddings::*;
pub use hardware::*;
pub use images::*;
pub use inference::*;
pub use models::*;
pub use provider::*;
pub use status::*;
pub use training::*;
pub use usage::*;

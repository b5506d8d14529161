//! Endpoint families.
//!
//! Each service is a borrowed view over [`Client`](crate::Client): it
//! normalizes the request, picks the verb and path, and hands off to the
//! transport core. Errors pass through untouched.

mod audio;
mod batch;
mod chat;
mod devices;
mod embeddings;
mod hardware;
mod images;
mod models;
mod provider;
mod status;
mod training;
mod usage;

pub use audio::AudioService;
pub use batch::BatchService;
pub use chat::{ChatService, CompletionsService};
pub use devices::DevicesService;
pub use embeddings::EmbeddingsService;
pub use hardware::HardwareService;
pub use images::ImagesService;
pub use models::ModelsService;
pub use provider::ProviderService;
pub use status::StatusService;
pub use training::{TrainingJobsService, TrainingService};
pub use usage::UsageService;

use crate::error::{RegraphError, Result};

/// Shared endpoint for chat, embeddings and images.
pub(crate) const INFERENCE_PATH: &str = "/inference";

/// `{collection}/{id}` with the id percent-encoded as a single segment.
pub(crate) fn item_path(collection: &str, id: &str) -> Result<String> {
    if id.trim().is_empty() {
        return Err(RegraphError::InvalidParameter(format!(
            "id for {collection} must not be empty"
        )));
    }
    Ok(format!("{collection}/{}", urlencoding::encode(id)))
}

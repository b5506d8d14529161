use super::INFERENCE_PATH;
use crate::client::Client;
use crate::error::Result;
use crate::types::{EmbeddingRequest, EmbeddingResponse, InferencePayload};

#[derive(Debug, Clone, Copy)]
pub struct EmbeddingsService<'a> {
    client: &'a Client,
}

impl<'a> EmbeddingsService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// `POST /inference` with `category: "embeddings"`.
    pub async fn create(&self, request: EmbeddingRequest) -> Result<EmbeddingResponse> {
        self.client
            .post(INFERENCE_PATH, &InferencePayload::embeddings(&request))
            .await
    }
}

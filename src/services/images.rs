use super::INFERENCE_PATH;
use crate::client::Client;
use crate::error::Result;
use crate::types::{ImageGenerationRequest, ImageGenerationResponse, InferencePayload};

#[derive(Debug, Clone, Copy)]
pub struct ImagesService<'a> {
    client: &'a Client,
}

impl<'a> ImagesService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// `POST /inference` with `category: "image"`; the model defaults to
    /// `dall-e-3`.
    pub async fn generate(&self, request: ImageGenerationRequest) -> Result<ImageGenerationResponse> {
        let request = request.with_defaults();
        self.client
            .post(INFERENCE_PATH, &InferencePayload::image(&request))
            .await
    }
}

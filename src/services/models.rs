use crate::client::Client;
use crate::error::Result;
use crate::types::{
    ModelDeployRequest, ModelDeployResponse, ModelsListOptions, ModelsResponse, QueryOptions,
};

#[derive(Debug, Clone, Copy)]
pub struct ModelsService<'a> {
    client: &'a Client,
}

impl<'a> ModelsService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// `GET /models`
    pub async fn list(&self, options: Option<&ModelsListOptions>) -> Result<ModelsResponse> {
        let query = options.map(|o| o.to_query()).unwrap_or_default();
        self.client.get("/models", &query).await
    }

    /// `POST /models/deploy`
    pub async fn deploy(&self, request: ModelDeployRequest) -> Result<ModelDeployResponse> {
        self.client.post("/models/deploy", &request).await
    }
}

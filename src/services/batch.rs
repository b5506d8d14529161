use super::item_path;
use crate::client::Client;
use crate::error::Result;
use crate::types::{BatchRequest, BatchResponse};

#[derive(Debug, Clone, Copy)]
pub struct BatchService<'a> {
    client: &'a Client,
}

impl<'a> BatchService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// `POST /batch`
    pub async fn create(&self, request: BatchRequest) -> Result<BatchResponse> {
        self.client.post("/batch", &request).await
    }

    /// `GET /batch/{id}`
    pub async fn get(&self, batch_id: &str) -> Result<BatchResponse> {
        let path = item_path("/batch", batch_id)?;
        self.client.get(&path, &[]).await
    }
}

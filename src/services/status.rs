use crate::client::Client;
use crate::error::Result;
use crate::types::PlatformStatus;

#[derive(Debug, Clone, Copy)]
pub struct StatusService<'a> {
    client: &'a Client,
}

impl<'a> StatusService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// `GET /status`
    pub async fn get(&self) -> Result<PlatformStatus> {
        self.client.get("/status", &[]).await
    }
}

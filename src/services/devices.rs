use crate::client::Client;
use crate::error::Result;
use crate::types::DevicesResponse;

#[derive(Debug, Clone, Copy)]
pub struct DevicesService<'a> {
    client: &'a Client,
}

impl<'a> DevicesService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// `GET /devices`
    pub async fn list(&self) -> Result<DevicesResponse> {
        self.client.get("/devices", &[]).await
    }
}

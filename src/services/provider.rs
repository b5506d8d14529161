use crate::client::Client;
use crate::error::Result;
use crate::types::{
    ProviderEarnings, ProviderEarningsOptions, ProviderRegistration, ProviderRegistrationResponse,
    QueryOptions,
};

/// Operations for hardware providers selling compute on the marketplace.
#[derive(Debug, Clone, Copy)]
pub struct ProviderService<'a> {
    client: &'a Client,
}

impl<'a> ProviderService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// `POST /provider/register`
    pub async fn register(
        &self,
        registration: ProviderRegistration,
    ) -> Result<ProviderRegistrationResponse> {
        self.client.post("/provider/register", &registration).await
    }

    /// `GET /provider/earnings`
    pub async fn earnings(
        &self,
        options: Option<&ProviderEarningsOptions>,
    ) -> Result<ProviderEarnings> {
        let query = options.map(|o| o.to_query()).unwrap_or_default();
        self.client.get("/provider/earnings", &query).await
    }
}

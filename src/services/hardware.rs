use crate::client::Client;
use crate::error::Result;
use crate::types::{HardwareRentalRequest, HardwareRentalResponse};

#[derive(Debug, Clone, Copy)]
pub struct HardwareService<'a> {
    client: &'a Client,
}

impl<'a> HardwareService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// `POST /hardware/rent`; one GPU for one hour unless specified.
    pub async fn rent(&self, request: HardwareRentalRequest) -> Result<HardwareRentalResponse> {
        self.client
            .post("/hardware/rent", &request.with_defaults())
            .await
    }
}

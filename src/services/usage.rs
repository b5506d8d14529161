use crate::client::Client;
use crate::error::Result;
use crate::types::{QueryOptions, UsageOptions, UsageStats};

#[derive(Debug, Clone, Copy)]
pub struct UsageService<'a> {
    client: &'a Client,
}

impl<'a> UsageService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// `GET /usage`, optionally bounded by `start_date` / `end_date`.
    pub async fn get(&self, options: Option<&UsageOptions>) -> Result<UsageStats> {
        let query = options.map(|o| o.to_query()).unwrap_or_default();
        self.client.get("/usage", &query).await
    }
}

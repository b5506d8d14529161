//! Hardware provider types.

use serde::{Deserialize, Serialize};

use super::DateRange;

/// Filters for `GET /provider/earnings`.
pub type ProviderEarningsOptions = DateRange;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderRegistration {
    pub name: String,
    pub hardware_type: String,
    pub compute_units: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl ProviderRegistration {
    pub fn new(name: impl Into<String>, hardware_type: impl Into<String>, compute_units: u32) -> Self {
        Self {
            name: name.into(),
            hardware_type: hardware_type.into(),
            compute_units,
            location: None,
        }
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderRegistrationResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderDailyEarnings {
    pub date: String,
    pub earned_usd: f64,
    pub requests_served: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderEarnings {
    pub total_earned_usd: f64,
    pub pending_usd: f64,
    pub paid_usd: f64,
    pub daily: Vec<ProviderDailyEarnings>,
}

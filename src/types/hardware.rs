//! GPU rental types.

use serde::{Deserialize, Serialize};

use crate::defaults;

/// Request body for `POST /hardware/rent`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardwareRentalRequest {
    /// e.g. `H100`, `A100`
    pub gpu_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpu_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_hours: Option<u32>,
}

impl HardwareRentalRequest {
    pub fn new(gpu_type: impl Into<String>) -> Self {
        Self {
            gpu_type: gpu_type.into(),
            gpu_count: None,
            duration_hours: None,
        }
    }

    pub fn gpu_count(mut self, count: u32) -> Self {
        self.gpu_count = Some(count);
        self
    }

    pub fn duration_hours(mut self, hours: u32) -> Self {
        self.duration_hours = Some(hours);
        self
    }

    /// One GPU for one hour unless the caller said otherwise.
    pub fn with_defaults(mut self) -> Self {
        self.gpu_count.get_or_insert(defaults::hardware::GPU_COUNT);
        self.duration_hours
            .get_or_insert(defaults::hardware::DURATION_HOURS);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardwareRentalResponse {
    pub rental_id: String,
    pub status: String,
    pub gpu_type: String,
    pub gpu_count: u32,
    pub duration_hours: u32,
    pub total_cost_usd: f64,
    pub started_at: String,
    pub expires_at: String,
}

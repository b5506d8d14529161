//! Platform health.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformStatus {
    pub status: String,
    pub uptime_percentage: f64,
    pub active_providers: u32,
    pub total_compute_units: u64,
    pub avg_latency_ms: u32,
    /// Service name to status string (e.g. `"inference" => "operational"`).
    pub services: BTreeMap<String, String>,
}

impl PlatformStatus {
    pub fn service(&self, name: &str) -> Option<&str> {
        self.services.get(name).map(String::as_str)
    }
}

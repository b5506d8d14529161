//! Account usage types.

use serde::{Deserialize, Serialize};

use super::DateRange;

/// Filters for `GET /usage`.
pub type UsageOptions = DateRange;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageDay {
    pub date: String,
    pub total_cost: f64,
    pub total_tokens: u64,
    pub request_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageStats {
    pub period_start: String,
    pub period_end: String,
    pub total_cost: f64,
    pub total_tokens: u64,
    pub total_requests: u64,
    pub daily: Vec<UsageDay>,
}

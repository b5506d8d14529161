//! Types shared across endpoint families.

use serde::{Deserialize, Serialize};

/// Token accounting reported with inference responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Query parameters in the order they are appended to the URL.
pub type QueryParams = Vec<(&'static str, String)>;

/// Options values that translate into URL query parameters.
///
/// Only fields that are set (and, for numbers, non-zero) produce a parameter;
/// unset filters are omitted entirely.
pub trait QueryOptions {
    fn to_query(&self) -> QueryParams;
}

/// Push `key=value` when the value is present and non-empty.
pub(crate) fn push_str(params: &mut QueryParams, key: &'static str, value: Option<&String>) {
    if let Some(v) = value.filter(|v| !v.is_empty()) {
        params.push((key, v.clone()));
    }
}

/// Push `key=value` when the value is present and non-zero.
pub(crate) fn push_count(params: &mut QueryParams, key: &'static str, value: Option<u32>) {
    if let Some(v) = value.filter(|v| *v > 0) {
        params.push((key, v.to_string()));
    }
}

/// Date-range filter shared by usage and earnings queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRange {
    /// Inclusive start date (`YYYY-MM-DD`).
    pub start_date: Option<String>,
    /// Inclusive end date (`YYYY-MM-DD`).
    pub end_date: Option<String>,
}

impl DateRange {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_date(mut self, date: impl Into<String>) -> Self {
        self.start_date = Some(date.into());
        self
    }

    pub fn end_date(mut self, date: impl Into<String>) -> Self {
        self.end_date = Some(date.into());
        self
    }
}

impl QueryOptions for DateRange {
    fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        push_str(&mut params, "start_date", self.start_date.as_ref());
        push_str(&mut params, "end_date", self.end_date.as_ref());
        params
    }
}

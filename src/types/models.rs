//! Model catalog and custom deployment types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::{QueryOptions, QueryParams, push_count, push_str};

/// A model available on the marketplace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub id: String,
    pub category: String,
    pub provider: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_1k_tokens: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u32>,
}

/// Catalog-wide facets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelsMeta {
    pub categories: Vec<String>,
    pub providers: Vec<String>,
    pub total_models: u32,
}

/// One page of the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelsResponse {
    pub models: Vec<Model>,
    pub total: u32,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
    pub meta: ModelsMeta,
}

/// Filters for `GET /models`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelsListOptions {
    pub category: Option<String>,
    pub provider: Option<String>,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl ModelsListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl QueryOptions for ModelsListOptions {
    fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        push_str(&mut params, "category", self.category.as_ref());
        push_str(&mut params, "provider", self.provider.as_ref());
        push_str(&mut params, "search", self.search.as_ref());
        push_count(&mut params, "page", self.page);
        push_count(&mut params, "limit", self.limit);
        params
    }
}

/// Kind of weights being deployed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelType {
    Lora,
    Full,
    Quantized,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDeployRequest {
    pub model_name: String,
    pub base_model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_type: Option<ModelType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights_url: Option<String>,
    /// Free-form deployment settings, forwarded as-is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Map<String, Value>>,
}

impl ModelDeployRequest {
    pub fn new(model_name: impl Into<String>, base_model: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
            base_model: base_model.into(),
            model_type: None,
            weights_url: None,
            config: None,
        }
    }

    pub fn model_type(mut self, model_type: ModelType) -> Self {
        self.model_type = Some(model_type);
        self
    }

    pub fn weights_url(mut self, url: impl Into<String>) -> Self {
        self.weights_url = Some(url.into());
        self
    }

    pub fn config(mut self, config: Map<String, Value>) -> Self {
        self.config = Some(config);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDeployResponse {
    pub deployment_id: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

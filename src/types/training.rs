//! Fine-tuning job types.

use serde::{Deserialize, Serialize};

/// Hyperparameters for a training job; unset values use server defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epochs: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learning_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lora_rank: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingJobRequest {
    pub model: String,
    /// Dataset identifier or URL.
    pub dataset: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<TrainingConfig>,
    /// Notified when the job finishes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
}

impl TrainingJobRequest {
    pub fn new(model: impl Into<String>, dataset: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            dataset: dataset.into(),
            config: None,
            callback_url: None,
        }
    }

    pub fn config(mut self, config: TrainingConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn callback_url(mut self, url: impl Into<String>) -> Self {
        self.callback_url = Some(url.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingJobResponse {
    pub job_id: String,
    pub status: String,
    pub model: String,
    pub dataset: String,
    pub config: TrainingConfig,
    pub estimated_cost_usd: f64,
    pub created_at: String,
    /// Completion fraction, when the job is running.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eta_minutes: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingJobsListResponse {
    pub jobs: Vec<TrainingJobResponse>,
}

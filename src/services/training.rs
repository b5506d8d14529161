use super::item_path;
use crate::client::Client;
use crate::error::Result;
use crate::types::{TrainingJobRequest, TrainingJobResponse, TrainingJobsListResponse};

const JOBS_PATH: &str = "/training/jobs";

/// `client.training()`
#[derive(Debug, Clone, Copy)]
pub struct TrainingService<'a> {
    client: &'a Client,
}

impl<'a> TrainingService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub fn jobs(&self) -> TrainingJobsService<'a> {
        TrainingJobsService {
            client: self.client,
        }
    }
}

/// `client.training().jobs()`
#[derive(Debug, Clone, Copy)]
pub struct TrainingJobsService<'a> {
    client: &'a Client,
}

impl TrainingJobsService<'_> {
    /// `POST /training/jobs`
    pub async fn create(&self, request: TrainingJobRequest) -> Result<TrainingJobResponse> {
        self.client.post(JOBS_PATH, &request).await
    }

    /// `GET /training/jobs`
    pub async fn list(&self) -> Result<TrainingJobsListResponse> {
        self.client.get(JOBS_PATH, &[]).await
    }

    /// `GET /training/jobs/{id}`
    pub async fn get(&self, job_id: &str) -> Result<TrainingJobResponse> {
        let path = item_path(JOBS_PATH, job_id)?;
        self.client.get(&path, &[]).await
    }

    /// `DELETE /training/jobs/{id}`
    pub async fn cancel(&self, job_id: &str) -> Result<()> {
        let path = item_path(JOBS_PATH, job_id)?;
        self.client.delete(&path).await
    }
}

//! ReGraph client
//!
//! [`Client`] is cheap to clone and safe to share across tasks: the
//! configuration behind it is read-only after [`ClientBuilder::build`].

use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

use crate::builder::ClientBuilder;
use crate::error::Result;
use crate::execution::executor::{HttpExecutor, decode, encode};
use crate::services::{
    AudioService, BatchService, ChatService, DevicesService, EmbeddingsService, HardwareService,
    ImagesService, ModelsService, ProviderService, StatusService, TrainingService, UsageService,
};

/// Client for the ReGraph API.
///
/// ```rust,ignore
/// use regraph::prelude::*;
///
/// let client = Client::new("your-api-key")?;
/// let resp = client
///     .chat()
///     .completions()
///     .create(ChatCompletionRequest::new("gpt-5", vec![ChatMessage::user("Hello!")]))
///     .await?;
/// println!("{}", resp.content().unwrap_or_default());
/// ```
#[derive(Clone)]
pub struct Client {
    executor: Arc<HttpExecutor>,
    cancel: Option<CancellationToken>,
}

impl Client {
    /// Client with default base URL and timeout.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        ClientBuilder::new().api_key(api_key).build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub(crate) fn from_executor(executor: HttpExecutor) -> Self {
        Self {
            executor: Arc::new(executor),
            cancel: None,
        }
    }

    pub fn base_url(&self) -> &str {
        self.executor.base_url()
    }

    pub fn timeout(&self) -> Duration {
        self.executor.timeout()
    }

    /// A handle sharing this client's configuration whose calls fail with
    /// [`RegraphError::Cancelled`](crate::RegraphError::Cancelled) once
    /// `token` is cancelled, aborting any request in flight.
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self {
            executor: Arc::clone(&self.executor),
            cancel: Some(token),
        }
    }

    pub fn chat(&self) -> ChatService<'_> {
        ChatService::new(self)
    }

    pub fn embeddings(&self) -> EmbeddingsService<'_> {
        EmbeddingsService::new(self)
    }

    pub fn images(&self) -> ImagesService<'_> {
        ImagesService::new(self)
    }

    pub fn audio(&self) -> AudioService<'_> {
        AudioService::new(self)
    }

    pub fn models(&self) -> ModelsService<'_> {
        ModelsService::new(self)
    }

    pub fn training(&self) -> TrainingService<'_> {
        TrainingService::new(self)
    }

    pub fn batch(&self) -> BatchService<'_> {
        BatchService::new(self)
    }

    pub fn usage(&self) -> UsageService<'_> {
        UsageService::new(self)
    }

    pub fn devices(&self) -> DevicesService<'_> {
        DevicesService::new(self)
    }

    pub fn status(&self) -> StatusService<'_> {
        StatusService::new(self)
    }

    pub fn provider(&self) -> ProviderService<'_> {
        ProviderService::new(self)
    }

    pub fn hardware(&self) -> HardwareService<'_> {
        HardwareService::new(self)
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let body = self
            .executor
            .execute(Method::GET, path, None, query, self.cancel.as_ref())
            .await?;
        decode(&body)
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = encode(body)?;
        let body = self
            .executor
            .execute(Method::POST, path, Some(body), &[], self.cancel.as_ref())
            .await?;
        decode(&body)
    }

    /// DELETE with no expected result; any 2xx body is ignored.
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        self.executor
            .execute(Method::DELETE, path, None, &[], self.cancel.as_ref())
            .await?;
        Ok(())
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url())
            .field("timeout", &self.timeout())
            .field("cancellable", &self.cancel.is_some())
            .finish_non_exhaustive()
    }
}

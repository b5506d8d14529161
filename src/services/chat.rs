use super::INFERENCE_PATH;
use crate::client::Client;
use crate::error::Result;
use crate::types::{ChatCompletionRequest, ChatCompletionResponse};

/// `client.chat()`
#[derive(Debug, Clone, Copy)]
pub struct ChatService<'a> {
    client: &'a Client,
}

impl<'a> ChatService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub fn completions(&self) -> CompletionsService<'a> {
        CompletionsService {
            client: self.client,
        }
    }

    /// Shorthand for `completions().create(..)`.
    pub async fn create(&self, request: ChatCompletionRequest) -> Result<ChatCompletionResponse> {
        self.completions().create(request).await
    }
}

/// `client.chat().completions()`
#[derive(Debug, Clone, Copy)]
pub struct CompletionsService<'a> {
    client: &'a Client,
}

impl CompletionsService<'_> {
    /// `POST /inference`
    pub async fn create(&self, request: ChatCompletionRequest) -> Result<ChatCompletionResponse> {
        self.client.post(INFERENCE_PATH, &request).await
    }
}

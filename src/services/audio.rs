use crate::client::Client;
use crate::error::Result;
use crate::types::{AudioSpeechRequest, AudioSpeechResponse};

#[derive(Debug, Clone, Copy)]
pub struct AudioService<'a> {
    client: &'a Client,
}

impl<'a> AudioService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// `POST /audio/speech`. Unset model, voice, format and speed are filled
    /// in before sending.
    pub async fn speech(&self, request: AudioSpeechRequest) -> Result<AudioSpeechResponse> {
        self.client
            .post("/audio/speech", &request.with_defaults())
            .await
    }
}

//! Text-to-speech types.

use serde::{Deserialize, Serialize};

use crate::defaults;

/// Request body for `POST /audio/speech`.
///
/// `model`, `voice`, `response_format` and `speed` are each defaulted
/// independently before submission (`tts-1`, `alloy`, `mp3`, `1.0`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioSpeechRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    pub input: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,
    /// `mp3`, `opus`, `aac` or `flac`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
}

impl AudioSpeechRequest {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            ..Default::default()
        }
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = Some(voice.into());
        self
    }

    pub fn response_format(mut self, format: impl Into<String>) -> Self {
        self.response_format = Some(format.into());
        self
    }

    pub fn speed(mut self, speed: f64) -> Self {
        self.speed = Some(speed);
        self
    }

    pub fn with_defaults(mut self) -> Self {
        fill(&mut self.model, defaults::audio::MODEL);
        fill(&mut self.voice, defaults::audio::VOICE);
        fill(&mut self.response_format, defaults::audio::RESPONSE_FORMAT);
        self.speed.get_or_insert(defaults::audio::SPEED);
        self
    }
}

fn fill(field: &mut Option<String>, default: &str) {
    if field.as_deref().is_none_or(str::is_empty) {
        *field = Some(default.to_string());
    }
}

/// Synthesized audio, base64 encoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioSpeechResponse {
    pub audio_base64: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

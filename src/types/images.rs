//! Image generation types.

use serde::{Deserialize, Serialize};

use crate::defaults;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageGenerationRequest {
    /// Defaults to `dall-e-3` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n: Option<u32>,
    /// e.g. `1024x1024`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// `standard` or `hd`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
    /// `natural` or `vivid`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

impl ImageGenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn n(mut self, n: u32) -> Self {
        self.n = Some(n);
        self
    }

    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn quality(mut self, quality: impl Into<String>) -> Self {
        self.quality = Some(quality.into());
        self
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Fill in the model the API requires when the caller left it unset.
    pub fn with_defaults(mut self) -> Self {
        if self.model.as_deref().is_none_or(str::is_empty) {
            self.model = Some(defaults::images::MODEL.to_string());
        }
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b64_json: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revised_prompt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageGenerationResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
    pub data: Vec<ImageData>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_model() {
        let req = ImageGenerationRequest::new("a red fox").with_defaults();
        assert_eq!(req.model.as_deref(), Some("dall-e-3"));

        let req = ImageGenerationRequest::new("a red fox").model("").with_defaults();
        assert_eq!(req.model.as_deref(), Some("dall-e-3"));
    }

    #[test]
    fn defaults_keep_explicit_model() {
        let req = ImageGenerationRequest::new("a red fox")
            .model("stable-diffusion-xl")
            .with_defaults();
        assert_eq!(req.model.as_deref(), Some("stable-diffusion-xl"));
        assert_eq!(req.n, None);
    }
}

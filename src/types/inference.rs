//! Payloads for the shared `/inference` endpoint.
//!
//! Embedding and image requests travel over the same endpoint as chat and
//! are told apart by a `category` field. [`InferencePayload`] assembles the
//! fields of each capability plus that discriminator; optional fields are
//! omitted when unset.

use serde::Serialize;

use super::{EmbeddingRequest, ImageGenerationRequest};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum InferencePayload<'a> {
    Embeddings {
        model: &'a str,
        input: &'a [String],
    },
    Image {
        model: &'a str,
        prompt: &'a str,
        #[serde(skip_serializing_if = "Option::is_none")]
        n: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        size: Option<&'a str>,
        #[serde(skip_serializing_if = "Option::is_none")]
        quality: Option<&'a str>,
        #[serde(skip_serializing_if = "Option::is_none")]
        style: Option<&'a str>,
    },
}

impl<'a> InferencePayload<'a> {
    pub fn embeddings(req: &'a EmbeddingRequest) -> Self {
        Self::Embeddings {
            model: &req.model,
            input: &req.input,
        }
    }

    /// Expects a request that already went through
    /// [`ImageGenerationRequest::with_defaults`]; an unset model is sent empty.
    pub fn image(req: &'a ImageGenerationRequest) -> Self {
        Self::Image {
            model: req.model.as_deref().unwrap_or_default(),
            prompt: &req.prompt,
            n: req.n,
            size: non_empty(req.size.as_deref()),
            quality: non_empty(req.quality.as_deref()),
            style: non_empty(req.style.as_deref()),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

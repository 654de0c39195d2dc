// src/core/inference.rs
//! Capability boundary to the external text-inference service.
//!
//! The analyzer only ever sees [`InferenceBackend`], so the Ollama client can be
//! replaced by a mock or a deterministic engine without touching the pipeline.

use async_trait::async_trait;
use thiserror::Error;

/// Shape the completion text is requested in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub prompt: String,
    pub format: OutputFormat,
}

impl CompletionRequest {
    pub fn json(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            format: OutputFormat::Json,
        }
    }

    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            format: OutputFormat::Text,
        }
    }
}

/// Failures of a single backend call.
///
/// Only `MalformedEnvelope` concerns the content of a successful response; every
/// other variant is a transport outcome.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("Cannot connect to inference backend at {url}: {message}")]
    Unreachable { url: String, message: String },

    #[error("Inference backend did not answer within {seconds}s")]
    Timeout { seconds: u64 },

    #[error("Inference backend returned error status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Inference backend request failed: {0}")]
    Transport(String),

    #[error("Inference backend response carries no completion text: {0}")]
    MalformedEnvelope(String),
}

impl BackendError {
    pub fn is_unreachable(&self) -> bool {
        matches!(self, BackendError::Unreachable { .. })
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    /// Run one completion and return the raw completion text
    async fn complete(&self, request: &CompletionRequest) -> Result<String, BackendError>;
}

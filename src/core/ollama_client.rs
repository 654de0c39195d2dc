// src/core/ollama_client.rs
//! Ollama HTTP client - one non-streamed `/api/generate` call per completion

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::error::Error as _;
use std::time::Duration;
use tracing::{debug, error, trace};

use super::config_manager::BackendSettings;
use super::inference::{BackendError, CompletionRequest, InferenceBackend, OutputFormat};

const GENERATE_ENDPOINT: &str = "/api/generate";

pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";
pub const DEFAULT_MODEL: &str = "llama3.2";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<&'static str>,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

#[derive(Clone)]
pub struct OllamaClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    timeout_seconds: u64,
}

impl OllamaClient {
    pub fn new(base_url: &str, model: &str, timeout_seconds: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            timeout_seconds,
        })
    }

    pub fn from_settings(settings: &BackendSettings) -> Result<Self> {
        Self::new(
            &settings.ollama_url,
            &settings.model,
            settings.timeout_seconds,
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn classify(&self, url: &str, err: reqwest::Error) -> BackendError {
        if err.is_timeout() {
            BackendError::Timeout {
                seconds: self.timeout_seconds,
            }
        } else if err.is_connect() && is_connection_refused(&err) {
            BackendError::Unreachable {
                url: url.to_string(),
                message: describe(&err),
            }
        } else {
            BackendError::Transport(describe(&err))
        }
    }
}

#[async_trait]
impl InferenceBackend for OllamaClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, BackendError> {
        let url = format!("{}{}", self.base_url, GENERATE_ENDPOINT);

        let payload = GenerateRequest {
            model: &self.model,
            prompt: &request.prompt,
            stream: false,
            format: match request.format {
                OutputFormat::Json => Some("json"),
                OutputFormat::Text => None,
            },
        };

        debug!(
            model = %self.model,
            prompt_chars = request.prompt.len(),
            "Calling Ollama: {}",
            url
        );

        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| self.classify(&url, e))?;

        let status = response.status();
        trace!("Response status: {}", status);

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("Ollama error response {}: {}", status, body);
            return Err(BackendError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.classify(&url, e))?;

        let envelope: GenerateResponse = serde_json::from_str(&body).map_err(|e| {
            BackendError::MalformedEnvelope(format!("{}. Raw response: {}", e, body))
        })?;

        Ok(envelope.response)
    }
}

/// reqwest hides the interesting part (e.g. "Connection refused") in the source chain
fn describe(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Only a refused connection means nothing is listening at the backend URL.
/// DNS and TLS failures are connect errors too, but point at the URL itself.
fn is_connection_refused(err: &reqwest::Error) -> bool {
    let mut source = err.source();
    while let Some(cause) = source {
        if let Some(io_err) = cause.downcast_ref::<std::io::Error>() {
            if io_err.kind() == std::io::ErrorKind::ConnectionRefused {
                return true;
            }
        }
        if cause.to_string().contains("Connection refused") {
            return true;
        }
        source = cause.source();
    }
    false
}

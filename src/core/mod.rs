// src/core/mod.rs
//! Configuration and the inference backend boundary

pub mod config_manager;
pub mod inference;
pub mod ollama_client;

pub use config_manager::{BackendSettings, ConfigManager, ConfigOverrides, ServerSettings};
pub use inference::{BackendError, CompletionRequest, InferenceBackend, OutputFormat};
pub use ollama_client::OllamaClient;

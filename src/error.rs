// src/error.rs
//! Error categories surfaced by the analysis pipeline

use crate::core::BackendError;
use crate::posting::ValidationError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Ollama is not running")]
    BackendUnreachable(#[source] BackendError),

    #[error("{0}")]
    BackendTransport(#[source] BackendError),
}

impl From<BackendError> for AnalysisError {
    fn from(err: BackendError) -> Self {
        if err.is_unreachable() {
            AnalysisError::BackendUnreachable(err)
        } else {
            AnalysisError::BackendTransport(err)
        }
    }
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;

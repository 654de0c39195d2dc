// src/analysis/analyzer.rs
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info, warn};

use super::prompt::{build_analysis_prompt, CONNECTION_TEST_PROMPT};
use super::verdict::ParseOutcome;
use super::{AnalysisResponse, JobEcho};
use crate::core::{BackendError, CompletionRequest, InferenceBackend};
use crate::error::AnalysisResult;
use crate::posting::{validate_posting, PostingInput};
use crate::utils::truncate_description;

/// Runs one posting through validation, the backend call and verdict recovery.
/// Holds no per-request state, so one instance serves all requests.
#[derive(Clone)]
pub struct TransparencyAnalyzer {
    backend: Arc<dyn InferenceBackend>,
}

impl TransparencyAnalyzer {
    pub fn new(backend: Arc<dyn InferenceBackend>) -> Self {
        Self { backend }
    }

    /// Validate a raw request body, then analyze it. Validation failures
    /// return before the backend is touched.
    pub async fn analyze_payload(&self, payload: &Value) -> AnalysisResult<AnalysisResponse> {
        let posting = validate_posting(payload)?;
        self.analyze(&posting).await
    }

    pub async fn analyze(&self, posting: &PostingInput) -> AnalysisResult<AnalysisResponse> {
        info!(
            ai_usage = posting.ai_usage().as_str(),
            "Analyzing: {}",
            posting.display_title()
        );

        let request = CompletionRequest::json(build_analysis_prompt(posting));

        let outcome = match self.backend.complete(&request).await {
            Ok(raw) => {
                let outcome = ParseOutcome::from_completion(&raw);
                if let ParseOutcome::Fallback { reason } = &outcome {
                    error!(%reason, "Failed to parse AI response: {}", raw);
                }
                outcome
            }
            Err(BackendError::MalformedEnvelope(detail)) => {
                error!("Failed to parse AI response: {}", detail);
                ParseOutcome::Fallback { reason: detail }
            }
            Err(e) => {
                error!("Error: {}", e);
                return Err(e.into());
            }
        };

        let verdict = outcome.into_verdict();

        if !verdict.is_consistent() {
            warn!(
                is_transparent = verdict.is_transparent,
                issues = verdict.issues.len(),
                "Model verdict contradicts its own issue list"
            );
        }

        info!(
            "Result: {}",
            if verdict.is_transparent {
                "Transparent"
            } else {
                "Issues Found"
            }
        );

        Ok(AnalysisResponse {
            success: true,
            job: JobEcho {
                title: posting.title.clone(),
                description: truncate_description(&posting.description),
            },
            analysis: verdict,
        })
    }

    /// Round-trip a trivial prompt to confirm the backend answers
    pub async fn check_connection(&self) -> Result<String, BackendError> {
        self.backend
            .complete(&CompletionRequest::text(CONNECTION_TEST_PROMPT))
            .await
    }
}

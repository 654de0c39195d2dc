// src/analysis/mod.rs
//! Transparency analysis of job postings, delegated to the inference backend

use serde::Serialize;

pub mod analyzer;
pub mod prompt;
pub mod verdict;

pub use analyzer::TransparencyAnalyzer;
pub use verdict::{AnalysisVerdict, ParseOutcome};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResponse {
    pub success: bool,
    pub job: JobEcho,
    pub analysis: AnalysisVerdict,
}

/// What the caller sent, as echoed back in the response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobEcho {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub description: String,
}

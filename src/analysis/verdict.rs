// src/analysis/verdict.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const FALLBACK_ISSUE: &str = "AI analysis failed";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisVerdict {
    pub is_transparent: bool,
    pub issues: Vec<String>,
}

impl AnalysisVerdict {
    /// Substituted whenever the model output cannot be read: unverifiable
    /// postings are reported as not transparent.
    pub fn fallback() -> Self {
        Self {
            is_transparent: false,
            issues: vec![FALLBACK_ISSUE.to_string()],
        }
    }

    /// A transparent verdict has no issues and vice versa
    pub fn is_consistent(&self) -> bool {
        self.is_transparent == self.issues.is_empty()
    }
}

/// Result of reading the model output. Both variants reach the caller as a
/// plain verdict; the tag is kept for logging and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    Parsed(AnalysisVerdict),
    Fallback { reason: String },
}

impl ParseOutcome {
    /// Only a JSON object is read as a verdict. serde would otherwise map a
    /// sequence like `[false, ["x"]]` onto the struct fields by position.
    pub fn from_completion(raw: &str) -> Self {
        let value = match serde_json::from_str::<Value>(raw) {
            Ok(value @ Value::Object(_)) => value,
            Ok(other) => {
                return ParseOutcome::Fallback {
                    reason: format!("expected a JSON object, got {}", json_kind(&other)),
                }
            }
            Err(e) => {
                return ParseOutcome::Fallback {
                    reason: e.to_string(),
                }
            }
        };

        match serde_json::from_value::<AnalysisVerdict>(value) {
            Ok(verdict) => ParseOutcome::Parsed(verdict),
            Err(e) => ParseOutcome::Fallback {
                reason: e.to_string(),
            },
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ParseOutcome::Fallback { .. })
    }

    pub fn into_verdict(self) -> AnalysisVerdict {
        match self {
            ParseOutcome::Parsed(verdict) => verdict,
            ParseOutcome::Fallback { .. } => AnalysisVerdict::fallback(),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

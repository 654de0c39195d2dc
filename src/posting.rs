// src/posting.rs
//! Incoming job posting payload and its validation

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

pub const DEFAULT_TITLE: &str = "Untitled Job";
pub const NOT_SPECIFIED: &str = "Not specified";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing {0} field")]
    MissingField(&'static str),
}

/// Validated posting. Optional fields are kept exactly as submitted; display
/// defaults only exist in the `display_*` accessors used for the prompt and
/// only replace absent fields. A blank value is shown as it was sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostingInput {
    pub title: Option<String>,
    pub description: String,
    pub salary: Option<String>,
    pub ai_used: Option<String>,
    pub requirements: Option<String>,
}

/// Employer-declared AI usage in hiring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiUsage {
    Yes,
    No,
    Unknown,
}

impl AiUsage {
    pub fn from_declared(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("yes") => AiUsage::Yes,
            Some(v) if v.eq_ignore_ascii_case("no") => AiUsage::No,
            _ => AiUsage::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AiUsage::Yes => "Yes",
            AiUsage::No => "No",
            AiUsage::Unknown => "Unknown",
        }
    }
}

/// Check the raw request body. Only `description` is mandatory: it must be a
/// non-empty string. Anything that is not a JSON object has no description.
pub fn validate_posting(raw: &Value) -> Result<PostingInput, ValidationError> {
    let description = match raw.get("description") {
        Some(Value::String(text)) if !text.is_empty() => text.clone(),
        _ => return Err(ValidationError::MissingField("description")),
    };

    Ok(PostingInput {
        title: text_field(raw, "title"),
        description,
        salary: text_field(raw, "salary"),
        ai_used: text_field(raw, "ai_used"),
        requirements: text_field(raw, "requirements"),
    })
}

// Non-string scalars keep their JSON spelling, e.g. `120000` or `true`.
fn text_field(raw: &Value, key: &str) -> Option<String> {
    match raw.get(key)? {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

fn or_default<'a>(value: &'a Option<String>, default: &'a str) -> &'a str {
    value.as_deref().unwrap_or(default)
}

impl PostingInput {
    pub fn display_title(&self) -> &str {
        or_default(&self.title, DEFAULT_TITLE)
    }

    pub fn display_salary(&self) -> &str {
        or_default(&self.salary, NOT_SPECIFIED)
    }

    pub fn display_ai_used(&self) -> &str {
        or_default(&self.ai_used, AiUsage::Unknown.as_str())
    }

    pub fn display_requirements(&self) -> &str {
        or_default(&self.requirements, NOT_SPECIFIED)
    }

    pub fn ai_usage(&self) -> AiUsage {
        AiUsage::from_declared(self.ai_used.as_deref())
    }
}

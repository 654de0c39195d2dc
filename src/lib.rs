//! Job posting transparency checker.
//!
//! Validates a posting, asks a local Ollama model to judge it against salary,
//! local-experience, AI-usage and vacancy disclosure rules, and turns the
//! model's answer into a typed verdict.

pub mod analysis;
pub mod cli;
pub mod core;
pub mod error;
pub mod logging;
pub mod posting;
pub mod utils;
pub mod web;

pub use analysis::{AnalysisResponse, AnalysisVerdict, TransparencyAnalyzer};
pub use error::AnalysisError;
pub use posting::{validate_posting, PostingInput, ValidationError};
pub use web::{build_rocket, start_web_server};

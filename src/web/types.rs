// src/web/types.rs

use rocket::http::Status;
use rocket::response::{self, status, Responder};
use rocket::serde::json::Json;
use rocket::serde::Serialize;
use rocket::Request;
use std::io;

use crate::error::AnalysisError;

pub const UNREACHABLE_FIX: &str = "Run \"ollama serve\" in another terminal";
pub const CONNECTION_TEST_FAILED: &str = "Ollama is not running. Run: ollama serve";
pub const BODY_TOO_LARGE: &str = "Request body too large";

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ServerInfoResponse {
    pub message: &'static str,
    pub endpoints: EndpointsInfo,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct EndpointsInfo {
    pub analyze: &'static str,
    pub test: &'static str,
}

impl ServerInfoResponse {
    pub fn running() -> Self {
        Self {
            message: "✅ Server is running!",
            endpoints: EndpointsInfo {
                analyze: "POST /analyze - Analyze a job posting",
                test: "GET /test - Test Ollama connection",
            },
        }
    }
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ConnectionTestResponse {
    pub success: bool,
    pub message: String,
}

/// Error body. Validation errors carry only `error`; backend failures add
/// `success: false` and, when the backend is down, a `fix` hint.
#[derive(Debug, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ErrorResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix: Option<String>,
}

#[derive(Debug)]
pub struct ApiError {
    pub status: Status,
    pub body: ErrorResponse,
}

impl ApiError {
    pub fn client(error: String) -> Self {
        Self {
            status: Status::BadRequest,
            body: ErrorResponse {
                success: None,
                error,
                fix: None,
            },
        }
    }

    pub fn server(status: Status, error: String) -> Self {
        Self {
            status,
            body: ErrorResponse {
                success: Some(false),
                error,
                fix: None,
            },
        }
    }

    /// Rocket reports a body over the data limit as an unexpected end of input
    pub fn unreadable_body(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::UnexpectedEof => {
                ApiError::server(Status::PayloadTooLarge, BODY_TOO_LARGE.to_string())
            }
            _ => ApiError::client(format!("Failed to read request body: {}", err)),
        }
    }

    pub fn with_fix(mut self, fix: &str) -> Self {
        self.body.fix = Some(fix.to_string());
        self
    }
}

impl From<AnalysisError> for ApiError {
    fn from(err: AnalysisError) -> Self {
        let message = err.to_string();
        match err {
            AnalysisError::Validation(_) => ApiError::client(message),
            AnalysisError::BackendUnreachable(_) => {
                ApiError::server(Status::ServiceUnavailable, message).with_fix(UNREACHABLE_FIX)
            }
            AnalysisError::BackendTransport(_) => {
                ApiError::server(Status::InternalServerError, message)
            }
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        status::Custom(self.status, Json(self.body)).respond_to(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BackendError;
    use crate::posting::ValidationError;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let api = ApiError::from(AnalysisError::Validation(ValidationError::MissingField(
            "description",
        )));

        assert_eq!(api.status, Status::BadRequest);
        assert_eq!(
            serde_json::to_value(&api.body).unwrap(),
            serde_json::json!({ "error": "Missing description field" })
        );
    }

    #[test]
    fn test_unreachable_maps_to_service_unavailable() {
        let api = ApiError::from(AnalysisError::BackendUnreachable(BackendError::Unreachable {
            url: "http://localhost:11434/api/generate".to_string(),
            message: "Connection refused".to_string(),
        }));

        assert_eq!(api.status, Status::ServiceUnavailable);
        assert_eq!(
            serde_json::to_value(&api.body).unwrap(),
            serde_json::json!({
                "success": false,
                "error": "Ollama is not running",
                "fix": "Run \"ollama serve\" in another terminal"
            })
        );
    }

    #[test]
    fn test_transport_failure_maps_to_internal_error() {
        let api = ApiError::from(AnalysisError::BackendTransport(BackendError::Status {
            status: 404,
            body: "model not found".to_string(),
        }));

        assert_eq!(api.status, Status::InternalServerError);
        assert_eq!(api.body.success, Some(false));
        assert_eq!(
            api.body.error,
            "Inference backend returned error status 404: model not found"
        );
        assert!(api.body.fix.is_none());
    }

    #[test]
    fn test_data_limit_maps_to_payload_too_large() {
        let api = ApiError::unreadable_body(&io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "data limit exceeded",
        ));

        assert_eq!(api.status, Status::PayloadTooLarge);
        assert_eq!(
            serde_json::to_value(&api.body).unwrap(),
            serde_json::json!({ "success": false, "error": "Request body too large" })
        );
    }

    #[test]
    fn test_other_read_failures_are_bad_requests() {
        let api = ApiError::unreadable_body(&io::Error::new(
            io::ErrorKind::ConnectionReset,
            "connection reset",
        ));

        assert_eq!(api.status, Status::BadRequest);
        assert_eq!(api.body.error, "Failed to read request body: connection reset");
    }
}

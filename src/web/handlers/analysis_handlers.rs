// src/web/handlers/analysis_handlers.rs

use crate::analysis::{AnalysisResponse, TransparencyAnalyzer};
use crate::web::types::ApiError;

use rocket::serde::json::{self, Json, Value};
use rocket::State;
use tracing::{warn, Instrument};
use uuid::Uuid;

pub async fn analyze_handler(
    payload: Result<Json<Value>, json::Error<'_>>,
    analyzer: &State<TransparencyAnalyzer>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let payload = match payload {
        Ok(Json(value)) => value,
        // Over the data limit or cut short while reading
        Err(json::Error::Io(e)) => {
            warn!("Failed to read request body: {}", e);
            return Err(ApiError::unreadable_body(&e));
        }
        // Not JSON: no description, so validation below rejects it
        Err(e) => {
            warn!("Request body is not JSON: {}", e);
            Value::Null
        }
    };

    let span = tracing::info_span!("analyze", request_id = %Uuid::new_v4());

    analyzer
        .analyze_payload(&payload)
        .instrument(span)
        .await
        .map(Json)
        .map_err(ApiError::from)
}

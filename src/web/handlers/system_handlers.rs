// src/web/handlers/system_handlers.rs

use crate::analysis::TransparencyAnalyzer;
use crate::web::types::*;

use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::State;
use tracing::{error, info};

pub async fn server_info_handler() -> Json<ServerInfoResponse> {
    Json(ServerInfoResponse::running())
}

pub async fn connection_test_handler(
    analyzer: &State<TransparencyAnalyzer>,
) -> Result<Json<ConnectionTestResponse>, ApiError> {
    match analyzer.check_connection().await {
        Ok(message) => {
            info!("Ollama connection test succeeded");
            Ok(Json(ConnectionTestResponse {
                success: true,
                message,
            }))
        }
        Err(e) => {
            error!("Ollama connection test failed: {}", e);
            Err(ApiError::server(
                Status::InternalServerError,
                CONNECTION_TEST_FAILED.to_string(),
            ))
        }
    }
}

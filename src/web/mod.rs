// src/web/mod.rs

pub mod handlers;
pub mod types;

pub use types::*;

use crate::analysis::{AnalysisResponse, TransparencyAnalyzer};
use crate::core::ConfigManager;
use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::serde::json::{self, Json, Value};
use rocket::{catchers, get, options, post, routes, Build, Request, Response, Rocket, State};
use tracing::info;

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "GET, HEAD, PUT, PATCH, POST, DELETE, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

#[get("/")]
pub async fn server_info() -> Json<ServerInfoResponse> {
    handlers::server_info_handler().await
}

#[get("/test")]
pub async fn connection_test(
    analyzer: &State<TransparencyAnalyzer>,
) -> Result<Json<ConnectionTestResponse>, ApiError> {
    handlers::connection_test_handler(analyzer).await
}

#[post("/analyze", data = "<payload>")]
pub async fn analyze(
    payload: Result<Json<Value>, json::Error<'_>>,
    analyzer: &State<TransparencyAnalyzer>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    handlers::analyze_handler(payload, analyzer).await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers
#[rocket::catch(400)]
pub fn bad_request() -> Json<ErrorResponse> {
    Json(ErrorResponse {
        success: None,
        error: "Invalid request format".to_string(),
        fix: None,
    })
}

#[rocket::catch(404)]
pub fn not_found(request: &Request<'_>) -> Json<ErrorResponse> {
    Json(ErrorResponse {
        success: None,
        error: format!("No route for {} {}", request.method(), request.uri()),
        fix: None,
    })
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<ErrorResponse> {
    Json(ErrorResponse {
        success: Some(false),
        error: "Internal server error".to_string(),
        fix: None,
    })
}

/// Attach routes, catchers and the shared analyzer to a Rocket instance
pub fn mount_api(rocket: Rocket<Build>, analyzer: TransparencyAnalyzer) -> Rocket<Build> {
    rocket
        .attach(Cors)
        .manage(analyzer)
        .register("/", catchers![bad_request, not_found, internal_error])
        .mount("/", routes![server_info, connection_test, analyze, options])
}

/// Rocket with its default configuration, as used by tests and embedders
pub fn build_rocket(analyzer: TransparencyAnalyzer) -> Rocket<Build> {
    mount_api(rocket::build(), analyzer)
}

// Main server start function
pub async fn start_web_server(config: &ConfigManager, analyzer: TransparencyAnalyzer) -> Result<()> {
    let figment = rocket::Config::figment()
        .merge(("address", config.server.address.as_str()))
        .merge(("port", config.server.port));

    info!(
        "Starting transparency API on {}:{}",
        config.server.address, config.server.port
    );

    mount_api(rocket::custom(figment), analyzer)
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("Rocket server failed: {}", e))?;

    Ok(())
}

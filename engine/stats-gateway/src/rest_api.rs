//! REST API endpoints for the stats gateway
//!
//! `/api/stats` takes a player query as a JSON body (GET or POST) and
//! returns the points, percentages, box-score and misc tables.

use game_logs::LogQuery;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::sync::Arc;
use tracing::{error, warn};
use warp::http::StatusCode;
use warp::Filter;

use crate::error::GatewayError;
use crate::service::StatsService;

/// Upper bound on request body size
const MAX_BODY_BYTES: u64 = 16 * 1024;

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub timestamp: String,
}

/// Error detail
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: &str, message: impl Into<String>, details: Option<serde_json::Value>) -> Self {
        Self {
            error: ErrorDetail { code: code.to_string(), message: message.into(), details },
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Compute stats tables for a player query
pub async fn get_stats(
    query: LogQuery,
    service: Arc<StatsService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    match service.stats(&query).await {
        Ok(tables) => Ok(warp::reply::json(&tables)),
        Err(e) => {
            warn!("Stats request for {} failed: {}", query.name, e);
            Err(warp::reject::custom(e))
        }
    }
}

/// Turn rejections into JSON error bodies
pub async fn handle_rejection(err: warp::Rejection) -> Result<impl warp::Reply, Infallible> {
    let (status, code, message, details) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "NOT_FOUND", "Resource not found".to_string(), None)
    } else if let Some(e) = err.find::<GatewayError>() {
        (e.status(), e.code(), e.to_string(), e.details())
    } else if let Some(e) = err.find::<warp::filters::body::BodyDeserializeError>() {
        (StatusCode::BAD_REQUEST, "INVALID_REQUEST", e.to_string(), None)
    } else if let Some(e) = err.find::<warp::reject::UnsupportedMediaType>() {
        (StatusCode::BAD_REQUEST, "INVALID_REQUEST", e.to_string(), None)
    } else if err.find::<warp::reject::LengthRequired>().is_some() {
        (StatusCode::BAD_REQUEST, "INVALID_REQUEST", "Request body is required".to_string(), None)
    } else if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        (
            StatusCode::PAYLOAD_TOO_LARGE,
            "PAYLOAD_TOO_LARGE",
            format!("Request body exceeds {} bytes", MAX_BODY_BYTES),
            None,
        )
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "METHOD_NOT_ALLOWED", "Method not allowed".to_string(), None)
    } else {
        error!("Unhandled rejection: {:?}", err);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "Internal server error".to_string(),
            None,
        )
    };

    let body = ErrorResponse::new(code, message, details);
    Ok(warp::reply::with_status(warp::reply::json(&body), status))
}

/// Create all REST API routes
pub fn create_routes(
    service: Arc<StatsService>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let service_filter = warp::any().map(move || service.clone());

    let stats = warp::path("api")
        .and(warp::path("stats"))
        .and(warp::path::end())
        .and(warp::get().or(warp::post()).unify())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json::<LogQuery>())
        .and(service_filter)
        .and_then(get_stats);

    // Health check endpoint
    let health = warp::path("health").and(warp::path::end()).and(warp::get()).map(|| {
        warp::reply::json(&serde_json::json!({
            "status": "healthy",
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    });

    stats.or(health).recover(handle_rejection).with(
        warp::cors()
            .allow_any_origin()
            .allow_headers(vec!["content-type"])
            .allow_methods(vec!["GET", "POST", "OPTIONS"]),
    )
}

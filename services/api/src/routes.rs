use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use eligibility::codes::result_code_router;
use eligibility::error::AppError;
use eligibility::response_log::{ResponseLogImporter, ResponseLogSummary};
use serde::Deserialize;
use serde_json::json;
use std::io::Cursor;

#[derive(Debug, Deserialize)]
pub(crate) struct ResponseLogSummaryRequest {
    pub(crate) csv: String,
}

pub(crate) fn with_service_routes() -> axum::Router {
    result_code_router()
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/eligibility/response-log/summary",
            axum::routing::post(response_log_summary_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn response_log_summary_endpoint(
    Json(payload): Json<ResponseLogSummaryRequest>,
) -> Result<Json<ResponseLogSummary>, AppError> {
    let reader = Cursor::new(payload.csv.into_bytes());
    let summary = ResponseLogImporter::from_reader(reader)?;
    Ok(Json(summary))
}

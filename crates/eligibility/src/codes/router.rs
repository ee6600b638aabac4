use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::json;

use super::catalog::{catalog, lookup};

/// Router builder exposing the result-code catalog and single-code lookups.
pub fn result_code_router() -> Router {
    Router::new()
        .route("/api/v1/eligibility/result-codes", get(catalog_handler))
        .route(
            "/api/v1/eligibility/result-codes/:code",
            get(lookup_handler),
        )
}

pub(crate) async fn catalog_handler() -> Response {
    (StatusCode::OK, axum::Json(catalog())).into_response()
}

pub(crate) async fn lookup_handler(Path(code): Path<String>) -> Response {
    match lookup(&code) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
    }
}

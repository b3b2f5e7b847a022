use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::response::Html;
use serde_json::Value;

use crate::application::engine;
use crate::domain::prediction::PredictionResult;
use crate::error::RequestError;
use crate::interfaces::http::request;

/// POST /api/predict — price a profile submitted by the form.
///
/// An absent or unparseable body is rejected before normalization; every
/// failure surfaces as 400 with the error message in the body.
pub async fn predict(
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<PredictionResult>, RequestError> {
    let Json(body) = body.map_err(|_| RequestError::MalformedBody)?;
    let profile = request::profile_from_body(&body)?;
    let result = engine::predict(&profile);
    tracing::debug!(role = %profile.role, expected = result.expected, "prediction served");
    Ok(Json(result))
}

/// GET /api/health — simple liveness check.
pub async fn health() -> Json<Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET / — the salary estimation form.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../../static/index.html"))
}

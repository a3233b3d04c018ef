use crate::services::get_metrics;
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

pub const SERVICE_NAME: &str = "AI Image Viewer API";

pub async fn root() -> impl IntoResponse {
    Json(json!({
        "status": "online",
        "service": SERVICE_NAME,
    }))
}

pub async fn metrics_endpoint() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        get_metrics(),
    )
}

use axum::{Json, http::StatusCode};

/// GET /
/// Greeting kept for clients probing the API root
pub async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!("Hello there!"))
}

/// GET /health
/// Simple healthcheck endpoint
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "ok"
        })),
    )
}

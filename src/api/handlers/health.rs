use axum::{Json, response::IntoResponse};
use chrono::Utc;
use serde_json::json;

pub async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "ok", "timestamp": Utc::now().to_rfc3339() }))
}

pub async fn index() -> impl IntoResponse {
    Json(json!({
        "message": "Lumina Hotel API is running",
        "docs": {
            "health": "/health",
            "public": "/api/v1",
            "admin": "/api/v1/admin"
        }
    }))
}

use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

pub async fn check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": Utc::now().to_rfc3339(),
        "service": "blog-api",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn ready() -> Json<Value> {
    Json(json!({
        "status": "ready",
        "timestamp": Utc::now().to_rfc3339(),
        "service": "blog-api",
    }))
}

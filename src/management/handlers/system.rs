//! # 系统处理器

use axum::Json;
use serde_json::{Value, json};

/// Ping
pub async fn ping_handler() -> &'static str {
    "pong"
}

/// 健康检查
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "account-admin",
        "timestamp": chrono::Utc::now(),
    }))
}

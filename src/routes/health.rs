use crate::cache::KeyValueCache;
use crate::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct Banner {
    pub service: &'static str,
    pub version: &'static str,
}

/// `GET /` — service banner.
pub async fn banner() -> Json<Banner> {
    Json(Banner {
        service: "poi-router",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn dependency_status(ok: bool, reason: &str) -> Value {
    if ok {
        json!("healthy")
    } else {
        json!(format!("unhealthy: {}", reason))
    }
}

/// `GET /health` — per-dependency status.
pub async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<Value>) {
    let cache_ok = state.cache.health_check().await;
    let db_ok = state.poi_repo.count().await.is_ok();
    let qdrant_ok = state.semantic.vector_store_health().await;

    let checks = json!({
        "redis": dependency_status(cache_ok, "connection check failed").await,
        "database": dependency_status(db_ok, "query failed").await,
        "qdrant": dependency_status(qdrant_ok, "query failed").await,
    });

    let healthy = cache_ok && db_ok && qdrant_ok;
    let status = if healthy { "healthy" } else { "degraded" };

    (StatusCode::OK, Json(json!({ "status": status, "checks": checks })))
}

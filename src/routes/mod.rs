pub mod health;
pub mod locations;
pub mod route_handlers;
pub mod semantic;
pub mod timing;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health::banner))
        .route("/health", get(health::health))
        .route("/api/v1/locations/search", post(locations::search))
        .route("/api/v1/semantic/search", post(semantic::search))
        .route("/api/v1/semantic/combined", post(semantic::combined))
        .route("/api/v1/route/routes", post(route_handlers::create_routes))
        .route("/api/v1/route/replace-poi", post(route_handlers::replace_poi))
        .route("/api/v1/route/confirm-replace-poi", post(route_handlers::confirm_replace_poi))
        .with_state(state)
}

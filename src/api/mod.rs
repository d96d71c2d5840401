// src/api/mod.rs

pub mod handler;

use crate::models::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub use handler::{health_handler, run_audit_handler, run_audit_query_handler};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/api/audit",
            post(run_audit_handler).get(run_audit_query_handler),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

use crate::error::AuditError;
use crate::models::{AppState, AuditResponse, HealthResponse, ParamsRunAudit};
use crate::services::run_site_audit;
use axum::extract::{
    rejection::{JsonRejection, QueryRejection},
    Json, Query, State,
};
use std::sync::Arc;

// extractor rejections are taken as values so they answer with the same JSON envelope
pub async fn run_audit_handler(
    State(state): State<Arc<AppState>>,
    params: Result<Json<ParamsRunAudit>, JsonRejection>,
) -> Result<Json<AuditResponse>, AuditError> {
    let Json(params) = params?;
    run_site_audit(&state, &params).await.map(Json)
}

// same operation, driven by the query string
pub async fn run_audit_query_handler(
    State(state): State<Arc<AppState>>,
    params: Result<Query<ParamsRunAudit>, QueryRejection>,
) -> Result<Json<AuditResponse>, AuditError> {
    let Query(params) = params?;
    run_site_audit(&state, &params).await.map(Json)
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

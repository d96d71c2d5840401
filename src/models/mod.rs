// src/models/mod.rs

pub mod api;
pub mod app;
pub mod lighthouse;
pub mod result;
pub mod visibility;

pub use api::{AuditResponse, ErrorResponse, HealthResponse, ParamsRunAudit};
pub use app::AppState;
pub use lighthouse::{CategoryKind, PageQualityReport};
pub use result::{AggregatedResult, CoreWebVitals, Opportunity, ScoringMode};
pub use visibility::{OrganicResult, VisibilityReport};

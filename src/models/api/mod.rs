pub mod params;
pub mod response;

pub use params::ParamsRunAudit;
pub use response::{AuditResponse, ErrorResponse, HealthResponse};

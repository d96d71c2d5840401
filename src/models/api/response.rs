use crate::models::result::AggregatedResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Response for the audit handler
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AuditResponse {
    #[serde(rename = "auditId")]
    pub audit_id: String,
    #[serde(rename = "siteUrl")]
    pub site_url: String,
    #[serde(rename = "auditedAt")]
    pub audited_at: DateTime<Utc>,
    #[serde(flatten)]
    pub result: AggregatedResult,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

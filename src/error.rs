use crate::models::ErrorResponse;
use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

const MAX_BODY_IN_ERROR: usize = 300;
const SITE_URL_HINT: &str = "send siteUrl as an absolute http(s) URL, e.g. https://example.com";

/// Failure talking to one of the external data providers.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("{provider} credential is not configured")]
    MissingCredential { provider: &'static str },

    #[error("request to {provider} failed: {source}")]
    Transport {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} responded with HTTP {status}: {body}")]
    Status {
        provider: &'static str,
        status: u16,
        body: String,
    },

    #[error("{provider} returned a malformed payload: {message}")]
    Malformed {
        provider: &'static str,
        message: String,
    },

    #[error("{provider} response is missing {what}")]
    MissingData {
        provider: &'static str,
        what: &'static str,
    },
}

impl ProviderError {
    pub fn status(provider: &'static str, status: u16, body: &str) -> Self {
        let body = match body.char_indices().nth(MAX_BODY_IN_ERROR) {
            Some((cut, _)) => format!("{}...", &body[..cut]),
            None => body.to_string(),
        };
        ProviderError::Status {
            provider,
            status,
            body,
        }
    }
}

/// Everything an audit request can fail with.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("siteUrl is required")]
    MissingSiteUrl,

    #[error("request could not be read: {0}")]
    InvalidRequest(String),

    #[error("siteUrl is not a valid http(s) URL: {0}")]
    InvalidSiteUrl(String),

    #[error("{0} is not configured")]
    MissingCredential(&'static str),

    #[error("audit of {site_url} failed: {message}")]
    Upstream { message: String, site_url: String },
}

impl AuditError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuditError::MissingSiteUrl
            | AuditError::InvalidRequest(_)
            | AuditError::InvalidSiteUrl(_) => StatusCode::BAD_REQUEST,
            AuditError::MissingCredential(_) | AuditError::Upstream { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn upstream(err: ProviderError, site_url: &str) -> Self {
        AuditError::Upstream {
            message: err.to_string(),
            site_url: site_url.to_string(),
        }
    }
}

impl From<JsonRejection> for AuditError {
    fn from(rejection: JsonRejection) -> Self {
        AuditError::InvalidRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AuditError {
    fn from(rejection: QueryRejection) -> Self {
        AuditError::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for AuditError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            AuditError::Upstream { message, site_url } => ErrorResponse {
                error: "Audit failed".to_string(),
                details: Some(message),
                url: Some(site_url),
            },
            AuditError::MissingCredential(name) => ErrorResponse {
                error: "Server misconfigured".to_string(),
                details: Some(format!("{name} is not configured")),
                url: None,
            },
            AuditError::MissingSiteUrl => ErrorResponse {
                error: "siteUrl is required".to_string(),
                details: Some(SITE_URL_HINT.to_string()),
                url: None,
            },
            AuditError::InvalidSiteUrl(reason) => ErrorResponse {
                error: "siteUrl is not a valid http(s) URL".to_string(),
                details: Some(reason),
                url: None,
            },
            AuditError::InvalidRequest(reason) => ErrorResponse {
                error: "Invalid request".to_string(),
                details: Some(reason),
                url: None,
            },
        };
        (status, Json(body)).into_response()
    }
}

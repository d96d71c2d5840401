use crate::config::Config;
use crate::services::site_audit_service::{
    PageQualityProvider, PageSpeedClient, SerpApiClient, VisibilityProvider,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub page_quality: Arc<dyn PageQualityProvider>,
    pub visibility: Arc<dyn VisibilityProvider>,
}

impl AppState {
    /// Builds the real provider clients, sharing one HTTP connection pool.
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout())
            .user_agent(concat!("seoscore/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            page_quality: Arc::new(PageSpeedClient::new(http.clone(), config)),
            visibility: Arc::new(SerpApiClient::new(http, config)),
        })
    }
}

use crate::config::{Config, Strategy};
use crate::error::ProviderError;
use crate::models::PageQualityReport;
use crate::services::site_audit_service::provider::PageQualityProvider;
use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;
use serde::Deserialize;

const PROVIDER: &str = "PageSpeed Insights";
const CATEGORIES: [&str; 4] = ["SEO", "PERFORMANCE", "ACCESSIBILITY", "BEST_PRACTICES"];

// only the embedded Lighthouse run is used from the PageSpeed envelope
#[derive(Debug, Deserialize)]
struct PageSpeedResponse {
    #[serde(rename = "lighthouseResult")]
    lighthouse_result: Option<PageQualityReport>,
}

/// Client for the PageSpeed Insights v5 `runPagespeed` endpoint.
pub struct PageSpeedClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
    strategy: Strategy,
}

impl PageSpeedClient {
    pub fn new(http: Client, config: &Config) -> Self {
        Self {
            http,
            base_url: config.pagespeed_base_url.clone(),
            api_key: config.pagespeed_api_key.clone(),
            strategy: config.pagespeed_strategy,
        }
    }

    fn query<'a>(&'a self, site_url: &'a str, key: &'a str) -> Vec<(&'static str, &'a str)> {
        let mut query = vec![
            ("url", site_url),
            ("key", key),
            ("strategy", self.strategy.as_str()),
        ];
        query.extend(CATEGORIES.iter().map(|category| ("category", *category)));
        query
    }
}

/// Pulls the Lighthouse report out of a raw PageSpeed response body.
pub fn parse_pagespeed_response(body: &str) -> Result<PageQualityReport, ProviderError> {
    let payload: PageSpeedResponse =
        serde_json::from_str(body).map_err(|e| ProviderError::Malformed {
            provider: PROVIDER,
            message: e.to_string(),
        })?;

    payload.lighthouse_result.ok_or(ProviderError::MissingData {
        provider: PROVIDER,
        what: "lighthouseResult",
    })
}

#[async_trait]
impl PageQualityProvider for PageSpeedClient {
    fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }

    async fn fetch_report(&self, site_url: &str) -> Result<PageQualityReport, ProviderError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or(ProviderError::MissingCredential { provider: PROVIDER })?;

        info!("Running {} ({}) for {}", PROVIDER, self.strategy, site_url);
        let transport = |source| ProviderError::Transport {
            provider: PROVIDER,
            source,
        };

        let response = self
            .http
            .get(&self.base_url)
            .query(&self.query(site_url, key))
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        let body = response.text().await.map_err(transport)?;
        if !status.is_success() {
            return Err(ProviderError::status(PROVIDER, status.as_u16(), &body));
        }

        debug!("{} returned {} bytes for {}", PROVIDER, body.len(), site_url);
        parse_pagespeed_response(&body)
    }
}

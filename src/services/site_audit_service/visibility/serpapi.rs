use crate::config::Config;
use crate::error::ProviderError;
use crate::models::OrganicResult;
use crate::services::site_audit_service::provider::VisibilityProvider;
use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;
use serde::Deserialize;

const PROVIDER: &str = "SerpApi";
const ENGINE: &str = "google";
// ranks past 20 score zero, so deeper pages are never needed
const RESULTS_DEPTH: &str = "20";
// SerpApi reports an empty result page through its `error` field
const NO_RESULTS: &str = "Google hasn't returned any results for this query.";

#[derive(Debug, Deserialize, Default)]
pub struct SearchInformation {
    #[serde(default)]
    pub total_results: Option<u64>,
}

#[derive(Debug, Deserialize, Default)]
pub struct SerpSearchResponse {
    #[serde(default)]
    pub organic_results: Vec<OrganicResult>,
    #[serde(default)]
    pub search_information: Option<SearchInformation>,
    #[serde(default)]
    pub error: Option<String>,
}

impl SerpSearchResponse {
    pub fn total_indexed(&self) -> u64 {
        self.search_information
            .as_ref()
            .and_then(|info| info.total_results)
            .unwrap_or(0)
    }
}

/// Parses a SerpApi body, turning API-level errors into provider errors.
pub fn parse_serp_response(body: &str) -> Result<SerpSearchResponse, ProviderError> {
    let payload: SerpSearchResponse =
        serde_json::from_str(body).map_err(|e| ProviderError::Malformed {
            provider: PROVIDER,
            message: e.to_string(),
        })?;

    match payload.error.as_deref() {
        None => Ok(payload),
        Some(NO_RESULTS) => Ok(SerpSearchResponse::default()),
        Some(message) => Err(ProviderError::Malformed {
            provider: PROVIDER,
            message: message.to_string(),
        }),
    }
}

/// Client for the SerpApi Google search endpoint.
pub struct SerpApiClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl SerpApiClient {
    pub fn new(http: Client, config: &Config) -> Self {
        Self {
            http,
            base_url: config.serpapi_base_url.clone(),
            api_key: config.serpapi_key.clone(),
        }
    }

    async fn search(&self, params: &[(&str, &str)]) -> Result<SerpSearchResponse, ProviderError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or(ProviderError::MissingCredential { provider: PROVIDER })?;
        let transport = |source| ProviderError::Transport {
            provider: PROVIDER,
            source,
        };

        let response = self
            .http
            .get(&self.base_url)
            .query(&[("engine", ENGINE), ("api_key", key)])
            .query(params)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        let body = response.text().await.map_err(transport)?;
        if !status.is_success() {
            return Err(ProviderError::status(PROVIDER, status.as_u16(), &body));
        }

        parse_serp_response(&body)
    }
}

#[async_trait]
impl VisibilityProvider for SerpApiClient {
    fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }

    async fn search_organic(
        &self,
        keyword: &str,
        location: &str,
    ) -> Result<Vec<OrganicResult>, ProviderError> {
        info!("Searching {:?} from {:?}", keyword, location);
        let payload = self
            .search(&[("q", keyword), ("location", location), ("num", RESULTS_DEPTH)])
            .await?;
        debug!("{} organic results for {:?}", payload.organic_results.len(), keyword);
        Ok(payload.organic_results)
    }

    async fn count_indexed(&self, domain: &str) -> Result<u64, ProviderError> {
        let query = format!("site:{}", domain);
        info!("Counting indexed pages with {:?}", query);
        let payload = self.search(&[("q", query.as_str())]).await?;
        Ok(payload.total_indexed())
    }
}

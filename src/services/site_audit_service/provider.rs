use crate::error::ProviderError;
use crate::models::{OrganicResult, PageQualityReport};
use async_trait::async_trait;

/// Source of Lighthouse reports.
#[async_trait]
pub trait PageQualityProvider: Send + Sync {
    /// Whether the provider has the credential it needs to be called.
    fn has_credentials(&self) -> bool;

    async fn fetch_report(&self, site_url: &str) -> Result<PageQualityReport, ProviderError>;
}

/// Source of search-engine results.
#[async_trait]
pub trait VisibilityProvider: Send + Sync {
    fn has_credentials(&self) -> bool;

    /// Organic results for `keyword` searched from `location`, best rank first.
    async fn search_organic(
        &self,
        keyword: &str,
        location: &str,
    ) -> Result<Vec<OrganicResult>, ProviderError>;

    /// Number of pages the search engine reports for `site:{domain}`.
    async fn count_indexed(&self, domain: &str) -> Result<u64, ProviderError>;
}

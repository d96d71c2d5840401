use crate::models::lighthouse::audit::Audit;
use crate::models::lighthouse::category::Categories;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single Lighthouse run as returned inside a PageSpeed Insights response.
///
/// Audits keep the provider's ordering, which decides which opportunities
/// are surfaced first.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct PageQualityReport {
    #[serde(rename = "requestedUrl", default)]
    pub requested_url: Option<String>,
    #[serde(default)]
    pub categories: Categories,
    #[serde(default)]
    pub audits: IndexMap<String, Audit>,
}

impl PageQualityReport {
    pub fn audit(&self, id: &str) -> Option<&Audit> {
        self.audits.get(id)
    }
}

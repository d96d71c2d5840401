use serde::{Deserialize, Serialize};

// one entry of the organic search results list
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct OrganicResult {
    #[serde(default)]
    pub link: String,
}

/// Search-visibility data gathered for one audit.
///
/// `target_domain` is the audited host with a leading `www.` removed; it is
/// what the organic links are matched against.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityReport {
    pub target_domain: String,
    pub organic_results: Vec<OrganicResult>,
    pub total_indexed: u64,
}

use serde::{Deserialize, Serialize};

/// Which weighting regime produced the final score.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ScoringMode {
    WithVisibility,
    WithoutVisibility,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct CoreWebVitals {
    #[serde(rename = "LCP")]
    pub lcp: Option<String>,
    #[serde(rename = "TBT")]
    pub tbt: Option<String>,
    #[serde(rename = "CLS")]
    pub cls: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Opportunity {
    pub title: String,
    #[serde(rename = "displayValue")]
    pub display_value: Option<String>,
}

/// Scores and derived metrics for one audited site.
///
/// Every score is an integer on a 0-100 scale. `final_score` is the composite
/// on a 0-10 scale, rendered with exactly one fractional digit.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedResult {
    pub seo_score: u32,
    pub performance_score: u32,
    pub accessibility_score: u32,
    pub best_practices_score: u32,
    pub keyword_score: u32,
    pub index_score: u32,
    pub keyword_rank: usize,
    pub core_web_vitals: CoreWebVitals,
    pub top_opportunities: Vec<Opportunity>,
    pub passed_audits_count: usize,
    pub scoring_mode: ScoringMode,
    pub final_score: String,
}

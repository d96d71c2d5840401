use crate::models::{CoreWebVitals, Opportunity, PageQualityReport};

pub const LCP_AUDIT: &str = "largest-contentful-paint";
pub const TBT_AUDIT: &str = "total-blocking-time";
pub const CLS_AUDIT: &str = "cumulative-layout-shift";

pub const MAX_OPPORTUNITIES: usize = 3;

pub fn extract_core_web_vitals(report: &PageQualityReport) -> CoreWebVitals {
    let display = |id: &str| report.audit(id).and_then(|a| a.display_value.clone());

    CoreWebVitals {
        lcp: display(LCP_AUDIT),
        tbt: display(TBT_AUDIT),
        cls: display(CLS_AUDIT),
    }
}

/// First `limit` unresolved opportunity audits, in the order the provider listed them.
pub fn extract_top_opportunities(report: &PageQualityReport, limit: usize) -> Vec<Opportunity> {
    report
        .audits
        .values()
        .filter(|audit| audit.is_opportunity() && !audit.is_passed())
        .take(limit)
        .map(|audit| Opportunity {
            title: audit.title.clone(),
            display_value: audit.display_value.clone(),
        })
        .collect()
}

pub fn count_passed_audits(report: &PageQualityReport) -> usize {
    report.audits.values().filter(|audit| audit.is_passed()).count()
}

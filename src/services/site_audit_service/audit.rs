use crate::error::{AuditError, ProviderError};
use crate::models::{AggregatedResult, AppState, AuditResponse, ParamsRunAudit, VisibilityReport};
use crate::services::site_audit_service::compute::compute_aggregate;
use crate::utils::{parse_site_url, target_domain};
use chrono::Utc;
use log::{error, info};
use reqwest::Url;
use uuid::Uuid;

const PAGESPEED_CREDENTIAL: &str = "PAGESPEED_API_KEY";

/// Runs one audit end to end: validation, provider calls, scoring.
///
/// Validation and configuration problems are reported before any provider
/// is called. Provider failures are collapsed into a single
/// [`AuditError::Upstream`] carrying the requested site URL.
pub async fn run_site_audit(
    state: &AppState,
    params: &ParamsRunAudit,
) -> Result<AuditResponse, AuditError> {
    let raw_url = params.site_url().ok_or(AuditError::MissingSiteUrl)?;
    let site_url = parse_site_url(raw_url)?;

    if !state.page_quality.has_credentials() {
        return Err(AuditError::MissingCredential(PAGESPEED_CREDENTIAL));
    }

    // decided once per request, from configuration and input only
    let search_terms = params
        .search_terms()
        .filter(|_| state.visibility.has_credentials());

    let audit_id = Uuid::new_v4().to_string();
    info!(
        "[{}] Starting audit of {} (visibility: {})",
        audit_id,
        raw_url,
        search_terms.is_some()
    );

    let result = fetch_and_score(state, &site_url, search_terms)
        .await
        .map_err(|err| {
            error!("[{}] Audit of {} failed: {}", audit_id, raw_url, err);
            AuditError::upstream(err, raw_url)
        })?;

    info!(
        "[{}] Audit of {} finished with score {}",
        audit_id, raw_url, result.final_score
    );

    Ok(AuditResponse {
        audit_id,
        site_url: raw_url.to_string(),
        audited_at: Utc::now(),
        result,
    })
}

async fn fetch_and_score(
    state: &AppState,
    site_url: &Url,
    search_terms: Option<(&str, &str)>,
) -> Result<AggregatedResult, ProviderError> {
    let report = state.page_quality.fetch_report(site_url.as_str()).await?;

    let visibility = match search_terms {
        Some((keyword, location)) => {
            let domain = target_domain(site_url);
            let organic_results = state.visibility.search_organic(keyword, location).await?;
            let total_indexed = state.visibility.count_indexed(&domain).await?;
            Some(VisibilityReport {
                target_domain: domain,
                organic_results,
                total_indexed,
            })
        }
        None => None,
    };

    Ok(compute_aggregate(&report, visibility.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScoringMode;
    use crate::services::site_audit_service::testing::{
        sample_report, FakePageQuality, FakeVisibility,
    };
    use std::sync::Arc;

    const SITE: &str = "https://example.com";

    struct Harness {
        state: AppState,
        page: Arc<FakePageQuality>,
        visibility: Arc<FakeVisibility>,
    }

    impl Harness {
        fn new(page: FakePageQuality, visibility: FakeVisibility) -> Self {
            let page = Arc::new(page);
            let visibility = Arc::new(visibility);
            let state = AppState {
                page_quality: page.clone(),
                visibility: visibility.clone(),
            };
            Self {
                state,
                page,
                visibility,
            }
        }

        async fn run(
            &self,
            site_url: Option<&str>,
            keyword: Option<&str>,
            location: Option<&str>,
        ) -> Result<AuditResponse, AuditError> {
            let params = ParamsRunAudit {
                site_url: site_url.map(String::from),
                keyword: keyword.map(String::from),
                location: location.map(String::from),
            };
            run_site_audit(&self.state, &params).await
        }
    }

    #[tokio::test]
    async fn test_missing_site_url_makes_no_calls() {
        let h = Harness::new(FakePageQuality::ok(sample_report()), FakeVisibility::disabled());

        let err = h.run(None, None, None).await.unwrap_err();
        assert!(matches!(err, AuditError::MissingSiteUrl));

        let err = h.run(Some("   "), None, None).await.unwrap_err();
        assert!(matches!(err, AuditError::MissingSiteUrl));
        assert_eq!(h.page.calls(), 0);
    }

    #[tokio::test]
    async fn test_invalid_site_url_makes_no_calls() {
        let h = Harness::new(FakePageQuality::ok(sample_report()), FakeVisibility::disabled());

        let err = h.run(Some("example dot com"), None, None).await.unwrap_err();
        assert!(matches!(err, AuditError::InvalidSiteUrl(_)));
        assert_eq!(h.page.calls(), 0);
    }

    #[tokio::test]
    async fn test_missing_credential_makes_no_calls() {
        let h = Harness::new(
            FakePageQuality::without_credentials(),
            FakeVisibility::ok(vec!["https://example.com/"], 10),
        );

        let err = h.run(Some(SITE), Some("rust"), Some("Austin")).await.unwrap_err();
        assert!(matches!(
            err,
            AuditError::MissingCredential("PAGESPEED_API_KEY")
        ));
        assert_eq!(h.page.calls(), 0);
        assert_eq!(h.visibility.calls(), 0);
    }

    #[tokio::test]
    async fn test_audit_without_search_terms_skips_visibility() {
        let h = Harness::new(
            FakePageQuality::ok(sample_report()),
            FakeVisibility::ok(vec!["https://example.com/"], 10),
        );

        let response = h
            .run(Some("https://www.example.com"), Some("rust"), None)
            .await
            .unwrap();

        assert_eq!(h.visibility.calls(), 0);
        assert_eq!(response.site_url, "https://www.example.com");
        assert_eq!(response.result.scoring_mode, ScoringMode::WithoutVisibility);
        assert_eq!(response.result.final_score, "8.9");
    }

    #[tokio::test]
    async fn test_audit_without_visibility_key_skips_visibility() {
        let h = Harness::new(FakePageQuality::ok(sample_report()), FakeVisibility::disabled());

        let response = h.run(Some(SITE), Some("rust"), Some("Austin")).await.unwrap();

        assert_eq!(h.visibility.calls(), 0);
        assert_eq!(response.result.scoring_mode, ScoringMode::WithoutVisibility);
        assert_eq!(response.result.keyword_score, 0);
        assert_eq!(response.result.index_score, 0);
    }

    #[tokio::test]
    async fn test_audit_with_visibility() {
        let h = Harness::new(
            FakePageQuality::ok(sample_report()),
            FakeVisibility::ok(vec!["https://rival.com/", "https://www.example.com/about"], 3),
        );

        let response = h
            .run(
                Some("https://www.example.com/"),
                Some("rust seo"),
                Some("Austin, Texas"),
            )
            .await
            .unwrap();

        assert_eq!(h.page.calls(), 1);
        assert_eq!(h.visibility.calls(), 2);
        assert_eq!(h.visibility.last_site_query().as_deref(), Some("example.com"));

        let result = response.result;
        assert_eq!(result.scoring_mode, ScoringMode::WithVisibility);
        assert_eq!(result.keyword_rank, 2);
        assert_eq!(result.keyword_score, 95);
        assert_eq!(result.index_score, 60);
        // 92*0.4 + 84*0.3 + 95*0.2 + 60*0.1 = 87.0
        assert_eq!(result.final_score, "8.7");
    }

    #[tokio::test]
    async fn test_regime_does_not_depend_on_fetched_content() {
        let h = Harness::new(FakePageQuality::ok(sample_report()), FakeVisibility::ok(vec![], 0));

        let response = h.run(Some(SITE), Some("rust"), Some("Austin")).await.unwrap();

        assert_eq!(response.result.scoring_mode, ScoringMode::WithVisibility);
        assert_eq!(response.result.keyword_rank, 0);
        // 92*0.4 + 84*0.3 = 62.0
        assert_eq!(response.result.final_score, "6.2");
    }

    #[tokio::test]
    async fn test_page_quality_failure_is_upstream_error() {
        let h = Harness::new(
            FakePageQuality::failing(),
            FakeVisibility::ok(vec!["https://example.com/"], 10),
        );

        let err = h.run(Some(SITE), Some("rust"), Some("Austin")).await.unwrap_err();
        match err {
            AuditError::Upstream { message, site_url } => {
                assert!(message.contains("lighthouseResult"), "{message}");
                assert_eq!(site_url, SITE);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(h.visibility.calls(), 0);
    }

    #[tokio::test]
    async fn test_visibility_failure_is_upstream_error() {
        let h = Harness::new(FakePageQuality::ok(sample_report()), FakeVisibility::failing());

        let err = h.run(Some(SITE), Some("rust"), Some("Austin")).await.unwrap_err();
        assert!(matches!(err, AuditError::Upstream { .. }));
    }
}

//! In-memory providers for exercising the audit flow without network access.

use crate::error::ProviderError;
use crate::models::{OrganicResult, PageQualityReport};
use crate::services::site_audit_service::provider::{PageQualityProvider, VisibilityProvider};
use async_trait::async_trait;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// seo 92, performance 84, accessibility 88, best-practices 95, with a few audits.
pub fn sample_report() -> PageQualityReport {
    serde_json::from_value(json!({
        "requestedUrl": "https://example.com/",
        "categories": {
            "seo": { "score": 0.92 },
            "performance": { "score": 0.84 },
            "accessibility": { "score": 0.88 },
            "best-practices": { "score": 0.95 }
        },
        "audits": {
            "largest-contentful-paint": { "score": 0.6, "title": "Largest Contentful Paint", "displayValue": "3.1 s" },
            "total-blocking-time": { "score": 0.9, "title": "Total Blocking Time", "displayValue": "180 ms" },
            "cumulative-layout-shift": { "score": 1, "title": "Cumulative Layout Shift", "displayValue": "0.02" },
            "unused-javascript": {
                "score": 0.4,
                "title": "Reduce unused JavaScript",
                "displayValue": "Est savings of 120 KiB",
                "details": { "type": "opportunity" }
            },
            "document-title": { "score": 1, "title": "Document has a <title> element" }
        }
    }))
    .expect("sample report is valid")
}

pub struct FakePageQuality {
    report: Option<PageQualityReport>,
    credentials: bool,
    calls: AtomicUsize,
}

impl FakePageQuality {
    pub fn ok(report: PageQualityReport) -> Self {
        Self {
            report: Some(report),
            credentials: true,
            calls: AtomicUsize::new(0),
        }
    }

    /// Configured, but every call fails as if the body had no report.
    pub fn failing() -> Self {
        Self {
            report: None,
            credentials: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn without_credentials() -> Self {
        Self {
            report: Some(sample_report()),
            credentials: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageQualityProvider for FakePageQuality {
    fn has_credentials(&self) -> bool {
        self.credentials
    }

    async fn fetch_report(&self, _site_url: &str) -> Result<PageQualityReport, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.report.clone().ok_or(ProviderError::MissingData {
            provider: "fake",
            what: "lighthouseResult",
        })
    }
}

pub struct FakeVisibility {
    links: Vec<String>,
    total_indexed: u64,
    credentials: bool,
    fail: bool,
    calls: AtomicUsize,
    site_query: Mutex<Option<String>>,
}

impl FakeVisibility {
    pub fn ok(links: Vec<&str>, total_indexed: u64) -> Self {
        Self {
            links: links.into_iter().map(String::from).collect(),
            total_indexed,
            credentials: true,
            fail: false,
            calls: AtomicUsize::new(0),
            site_query: Mutex::new(None),
        }
    }

    pub fn disabled() -> Self {
        Self {
            credentials: false,
            ..Self::ok(vec!["https://example.com/"], 10)
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::ok(vec![], 0)
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_site_query(&self) -> Option<String> {
        self.site_query.lock().expect("lock poisoned").clone()
    }

    fn check(&self) -> Result<(), ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(ProviderError::status("fake", 503, "unavailable"));
        }
        Ok(())
    }
}

#[async_trait]
impl VisibilityProvider for FakeVisibility {
    fn has_credentials(&self) -> bool {
        self.credentials
    }

    async fn search_organic(
        &self,
        _keyword: &str,
        _location: &str,
    ) -> Result<Vec<OrganicResult>, ProviderError> {
        self.check()?;
        Ok(self
            .links
            .iter()
            .map(|link| OrganicResult { link: link.clone() })
            .collect())
    }

    async fn count_indexed(&self, domain: &str) -> Result<u64, ProviderError> {
        self.check()?;
        *self.site_query.lock().expect("lock poisoned") = Some(domain.to_string());
        Ok(self.total_indexed)
    }
}

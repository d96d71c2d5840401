use crate::error::AuditError;
use reqwest::Url;

/// Parses the audited site URL. Only absolute http(s) URLs with a host are accepted.
pub fn parse_site_url(raw: &str) -> Result<Url, AuditError> {
    let url = Url::parse(raw.trim()).map_err(|e| AuditError::InvalidSiteUrl(e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(AuditError::InvalidSiteUrl(format!(
            "unsupported scheme {:?}",
            url.scheme()
        )));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(AuditError::InvalidSiteUrl("missing host".to_string()));
    }

    Ok(url)
}

/// Hostname of `url` with one leading `www.` stripped.
pub fn target_domain(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default().to_ascii_lowercase();
    match host.strip_prefix("www.") {
        Some(rest) => rest.to_string(),
        None => host,
    }
}

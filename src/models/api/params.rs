use serde::Deserialize;

// inbound audit request, accepted as a JSON body or a query string
#[derive(Debug, Deserialize, Default, Clone)]
pub struct ParamsRunAudit {
    #[serde(rename = "siteUrl", alias = "url", default)]
    pub site_url: Option<String>,
    #[serde(default)]
    pub keyword: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl ParamsRunAudit {
    /// Keyword and location, only when both carry non-blank text.
    pub fn search_terms(&self) -> Option<(&str, &str)> {
        let keyword = non_blank(self.keyword.as_deref())?;
        let location = non_blank(self.location.as_deref())?;
        Some((keyword, location))
    }

    pub fn site_url(&self) -> Option<&str> {
        non_blank(self.site_url.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

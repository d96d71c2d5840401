use serde::{Deserialize, Serialize};

const OPPORTUNITY: &str = "opportunity";

// pub struct for individual audit results
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Audit {
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "displayValue", default)]
    pub display_value: Option<String>,
    #[serde(default)]
    pub details: Option<AuditDetails>,
}

// only the discriminator is read, the rest of the details payload is ignored
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AuditDetails {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

impl Audit {
    /// An audit passes only on a perfect score; partial and null scores do not count.
    pub fn is_passed(&self) -> bool {
        self.score == Some(1.0)
    }

    pub fn is_opportunity(&self) -> bool {
        self.details
            .as_ref()
            .and_then(|d| d.kind.as_deref())
            .is_some_and(|kind| kind == OPPORTUNITY)
    }
}

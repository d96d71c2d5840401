use serde::{Deserialize, Serialize};

// pub struct for each category score
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Category {
    #[serde(default)]
    pub score: Option<f64>,
}

// pub struct for Lighthouse categories
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Categories {
    pub seo: Option<Category>,
    pub performance: Option<Category>,
    pub accessibility: Option<Category>,
    #[serde(rename = "best-practices")]
    pub best_practices: Option<Category>,
}

/// The four Lighthouse categories that feed the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryKind {
    Seo,
    Performance,
    Accessibility,
    BestPractices,
}

impl Categories {
    /// Raw 0-1 score reported for `kind`, if the provider sent one.
    pub fn raw_score(&self, kind: CategoryKind) -> Option<f64> {
        let category = match kind {
            CategoryKind::Seo => &self.seo,
            CategoryKind::Performance => &self.performance,
            CategoryKind::Accessibility => &self.accessibility,
            CategoryKind::BestPractices => &self.best_practices,
        };
        category.as_ref().and_then(|c| c.score)
    }
}

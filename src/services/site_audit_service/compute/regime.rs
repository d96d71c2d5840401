use crate::models::ScoringMode;

/// Integer 0-100 scores that enter the composite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreCard {
    pub seo: u32,
    pub performance: u32,
    pub accessibility: u32,
    pub best_practices: u32,
    pub keyword: u32,
    pub index: u32,
}

/// Weights used when search-visibility data was gathered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityWeights {
    pub seo: f64,
    pub performance: f64,
    pub keyword: f64,
    pub index: f64,
}

impl Default for VisibilityWeights {
    fn default() -> Self {
        Self {
            seo: 0.4,
            performance: 0.3,
            keyword: 0.2,
            index: 0.1,
        }
    }
}

/// Weights over the four Lighthouse categories, used without visibility data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualityWeights {
    pub seo: f64,
    pub performance: f64,
    pub accessibility: f64,
    pub best_practices: f64,
}

impl Default for QualityWeights {
    fn default() -> Self {
        Self {
            seo: 0.3,
            performance: 0.3,
            accessibility: 0.2,
            best_practices: 0.2,
        }
    }
}

impl QualityWeights {
    /// Rescales the weights so they sum to 1. A non-positive sum is returned unchanged.
    pub fn normalized(&self) -> Self {
        let sum = self.seo + self.performance + self.accessibility + self.best_practices;
        if sum <= 0.0 {
            return *self;
        }
        Self {
            seo: self.seo / sum,
            performance: self.performance / sum,
            accessibility: self.accessibility / sum,
            best_practices: self.best_practices / sum,
        }
    }
}

/// The two mutually exclusive weighting schemes for the composite score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScoringRegime {
    WithVisibility(VisibilityWeights),
    WithoutVisibility(QualityWeights),
}

impl ScoringRegime {
    /// Picks the regime from whether visibility data was gathered at all,
    /// never from what that data contains.
    pub fn select(visibility_used: bool) -> Self {
        if visibility_used {
            ScoringRegime::WithVisibility(VisibilityWeights::default())
        } else {
            ScoringRegime::WithoutVisibility(QualityWeights::default())
        }
    }

    pub fn mode(&self) -> ScoringMode {
        match self {
            ScoringRegime::WithVisibility(_) => ScoringMode::WithVisibility,
            ScoringRegime::WithoutVisibility(_) => ScoringMode::WithoutVisibility,
        }
    }

    /// Composite on the 0-100 scale.
    pub fn weighted_total(&self, card: &ScoreCard) -> f64 {
        match self {
            ScoringRegime::WithVisibility(w) => {
                card.seo as f64 * w.seo
                    + card.performance as f64 * w.performance
                    + card.keyword as f64 * w.keyword
                    + card.index as f64 * w.index
            }
            ScoringRegime::WithoutVisibility(w) => {
                let w = w.normalized();
                card.seo as f64 * w.seo
                    + card.performance as f64 * w.performance
                    + card.accessibility as f64 * w.accessibility
                    + card.best_practices as f64 * w.best_practices
            }
        }
    }
}

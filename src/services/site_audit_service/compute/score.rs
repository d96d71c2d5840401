use super::extract::{
    count_passed_audits, extract_core_web_vitals, extract_top_opportunities, MAX_OPPORTUNITIES,
};
use super::regime::{ScoreCard, ScoringRegime};
use crate::models::{
    AggregatedResult, CategoryKind, OrganicResult, PageQualityReport, VisibilityReport,
};

/// Points lost per rank position below #1.
const RANK_DECAY: u32 = 5;
/// Indexed-page count at which index coverage is considered complete.
const INDEXED_PAGES_FOR_FULL_SCORE: u64 = 5;

/// Converts a raw 0-1 Lighthouse category score to 0-100. Missing scores count as 0.
pub fn category_score(raw: Option<f64>) -> u32 {
    match raw {
        Some(score) if score.is_finite() => (score * 100.0).round().clamp(0.0, 100.0) as u32,
        _ => 0,
    }
}

/// 1-based position of the first organic result linking to `domain`, 0 when absent.
pub fn find_rank(results: &[OrganicResult], domain: &str) -> usize {
    results
        .iter()
        .position(|result| result.link.to_ascii_lowercase().contains(domain))
        .map_or(0, |index| index + 1)
}

pub fn keyword_score(rank: usize) -> u32 {
    if rank == 0 {
        return 0;
    }
    let penalty = (rank as u64 - 1).saturating_mul(RANK_DECAY as u64);
    100u64.saturating_sub(penalty) as u32
}

pub fn index_score(total_indexed: u64) -> u32 {
    if total_indexed >= INDEXED_PAGES_FOR_FULL_SCORE {
        100
    } else {
        (total_indexed as f64 / INDEXED_PAGES_FOR_FULL_SCORE as f64 * 100.0).round() as u32
    }
}

/// Renders a 0-100 composite as a 0-10 score with one decimal, rounding half up.
///
/// The composite is snapped to three decimals first so that binary noise
/// (84.5 stored as 84.4999...) does not flip the rounding direction.
pub fn format_final_score(score_100: f64) -> String {
    let snapped = (score_100 * 1000.0).round() / 1000.0;
    let tenths = snapped.round() as u32;
    format!("{}.{}", tenths / 10, tenths % 10)
}

/// Folds a page-quality report and optional visibility data into one result.
///
/// The weighting regime follows from whether `visibility` is present.
pub fn compute_aggregate(
    report: &PageQualityReport,
    visibility: Option<&VisibilityReport>,
) -> AggregatedResult {
    let categories = &report.categories;
    let mut card = ScoreCard {
        seo: category_score(categories.raw_score(CategoryKind::Seo)),
        performance: category_score(categories.raw_score(CategoryKind::Performance)),
        accessibility: category_score(categories.raw_score(CategoryKind::Accessibility)),
        best_practices: category_score(categories.raw_score(CategoryKind::BestPractices)),
        ..ScoreCard::default()
    };

    let mut keyword_rank = 0;
    if let Some(visibility) = visibility {
        keyword_rank = find_rank(&visibility.organic_results, &visibility.target_domain);
        card.keyword = keyword_score(keyword_rank);
        card.index = index_score(visibility.total_indexed);
    }

    let regime = ScoringRegime::select(visibility.is_some());
    let final_score = format_final_score(regime.weighted_total(&card));

    AggregatedResult {
        seo_score: card.seo,
        performance_score: card.performance,
        accessibility_score: card.accessibility,
        best_practices_score: card.best_practices,
        keyword_score: card.keyword,
        index_score: card.index,
        keyword_rank,
        core_web_vitals: extract_core_web_vitals(report),
        top_opportunities: extract_top_opportunities(report, MAX_OPPORTUNITIES),
        passed_audits_count: count_passed_audits(report),
        scoring_mode: regime.mode(),
        final_score,
    }
}

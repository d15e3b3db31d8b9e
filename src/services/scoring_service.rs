/// Weight applied to the magnitude of a non-negative sentiment score.
const POSITIVE_DISCOUNT: f64 = 0.3;

/// Penalty added per matched keyword, capped at `KEYWORD_PENALTY_CAP`.
const KEYWORD_PENALTY_STEP: f64 = 0.1;
const KEYWORD_PENALTY_CAP: f64 = 0.5;

/// Penalty added per triggered category; uncapped before the final clamp.
const CATEGORY_PENALTY_STEP: f64 = 0.15;

/// Combine sentiment polarity and taxonomy evidence into a risk score.
///
/// ```text
/// base             = |sentiment_score|
/// raw_risk         = sentiment_score < 0 ? base : base * 0.3
/// keyword_penalty  = min(0.5, matched_keywords * 0.1)
/// category_penalty = categories * 0.15
/// risk_score       = min(1.0, raw_risk + keyword_penalty + category_penalty)
/// ```
///
/// Negative tone contributes its full magnitude; positive and neutral tone
/// are discounted. The result is in [0.0, 1.0] for any in-range input, and
/// downstream consumers rely on the formula being reproduced exactly.
pub fn calculate_risk_score(
    sentiment_score: f64,
    matched_keywords: &[String],
    risk_categories: &[String],
) -> f64 {
    let base = sentiment_score.abs();
    let raw_risk = if sentiment_score < 0.0 {
        base
    } else {
        base * POSITIVE_DISCOUNT
    };

    let keyword_penalty =
        (matched_keywords.len() as f64 * KEYWORD_PENALTY_STEP).min(KEYWORD_PENALTY_CAP);
    let category_penalty = risk_categories.len() as f64 * CATEGORY_PENALTY_STEP;

    (raw_risk + keyword_penalty + category_penalty).min(1.0)
}

use crate::models::Sentiment;

/// Terms signalling negative tone. Emotional tone only — business-risk
/// vocabulary belongs in the company knowledge base, not here.
const NEGATIVE_LEXICON: &[&str] = &[
    "loss", "fail", "decline", "drop", "plunge", "crash", "down", "fell", "slump", "weak",
    "poor", "miss", "delay", "shortage", "risk", "threat", "concern", "worry", "problem",
    "issue", "lawsuit", "sue", "fine", "penalty", "ban", "violation", "breach", "hack",
    "attack", "strike", "layoff", "cut",
];

/// Terms signalling positive tone.
const POSITIVE_LEXICON: &[&str] = &[
    "gain", "rise", "growth", "increase", "surge", "jump", "up", "beat", "strong", "robust",
    "excellent", "success", "win", "profit", "revenue", "expansion", "launch", "innovation",
    "partnership", "deal", "agreement", "boost", "improve",
];

/// Label thresholds are strict, so a score of exactly ±0.2 stays neutral.
const NEGATIVE_THRESHOLD: f64 = -0.2;
const POSITIVE_THRESHOLD: f64 = 0.2;

/// Estimate sentiment polarity for a block of text.
///
/// Returns a label and a score in [-1.0, 1.0]. Text with no lexicon hits of
/// either kind scores 0.0 and reads neutral; this never fails.
pub fn estimate_sentiment(text: &str) -> (Sentiment, f64) {
    let text_lower = text.to_lowercase();

    let negative = count_hits(&text_lower, NEGATIVE_LEXICON);
    let positive = count_hits(&text_lower, POSITIVE_LEXICON);

    let total = (positive + negative).max(1);
    let score = (positive as f64 - negative as f64) / total as f64;
    let score = score.clamp(-1.0, 1.0);

    (classify(score), score)
}

/// Number of lexicon terms present in the text. Presence, not frequency: a
/// term repeated ten times still counts once.
fn count_hits(text_lower: &str, lexicon: &[&str]) -> usize {
    lexicon
        .iter()
        .filter(|term| text_lower.contains(*term))
        .count()
}

fn classify(score: f64) -> Sentiment {
    if score < NEGATIVE_THRESHOLD {
        Sentiment::Negative
    } else if score > POSITIVE_THRESHOLD {
        Sentiment::Positive
    } else {
        Sentiment::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_neutral_zero() {
        let (label, score) = estimate_sentiment("");
        assert_eq!(label, Sentiment::Neutral);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_no_lexicon_hits_is_neutral_zero() {
        let (label, score) = estimate_sentiment("The quarterly shareholder letter was published.");
        assert_eq!(label, Sentiment::Neutral);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_purely_negative_text() {
        let (label, score) = estimate_sentiment("Production delays and chip shortage cause losses");
        assert_eq!(label, Sentiment::Negative);
        assert_eq!(score, -1.0);
    }

    #[test]
    fn test_purely_positive_text() {
        let (label, score) = estimate_sentiment("Revenue growth and profit surge");
        assert_eq!(label, Sentiment::Positive);
        assert_eq!(score, 1.0);
    }

    #[test]
    fn test_case_insensitive() {
        let (label, _) = estimate_sentiment("LAWSUIT and PENALTY loom");
        assert_eq!(label, Sentiment::Negative);
    }

    #[test]
    fn test_boundary_minus_point_two_is_neutral() {
        // 2 positive hits (gain, rise), 3 negative hits (loss, fail, decline):
        // (2 - 3) / 5 = -0.2, not strictly below the threshold.
        let (label, score) = estimate_sentiment("gain rise loss fail decline");
        assert_eq!(score, -0.2);
        assert_eq!(label, Sentiment::Neutral);
    }

    #[test]
    fn test_boundary_plus_point_two_is_neutral() {
        // 3 positive hits (gain, rise, growth), 2 negative hits (loss, fail):
        // (3 - 2) / 5 = 0.2, not strictly above the threshold.
        let (label, score) = estimate_sentiment("gain rise growth loss fail");
        assert_eq!(score, 0.2);
        assert_eq!(label, Sentiment::Neutral);
    }

    #[test]
    fn test_score_always_in_range() {
        let samples = [
            "loss fail decline drop plunge crash down fell slump weak poor miss",
            "gain rise growth increase surge jump up beat strong robust",
            "gain loss",
            "steady quarter with no notable developments",
        ];
        for text in samples {
            let (_, score) = estimate_sentiment(text);
            assert!((-1.0..=1.0).contains(&score), "{} -> {}", text, score);
        }
    }

    #[test]
    fn test_deterministic() {
        let text = "Profit growth despite lawsuit concerns";
        assert_eq!(estimate_sentiment(text), estimate_sentiment(text));
    }
}

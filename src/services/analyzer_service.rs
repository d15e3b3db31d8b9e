use regex::Regex;

use crate::errors::AppError;
use crate::models::{Article, CompanyProfile, RiskAnalysis, Sentiment};
use crate::services::{keyword_service, scoring_service, sentiment_service};

/// Sentences shorter than this (after trimming) are dropped by the summarizer.
const MIN_SENTENCE_CHARS: usize = 21;
const SUMMARY_MAX_CHARS: usize = 500;
const REASONING_MAX_CHARS: usize = 250;
/// The reasoning string cites at most this many matched keywords.
const REASONING_KEYWORD_LIMIT: usize = 3;

/// Tunables for per-article analysis.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Sentences kept in the summary.
    pub max_sentences: usize,
    /// Whether the title is prepended to the content for sentiment and
    /// keyword scanning. Fixed on by default; changing it changes
    /// matched_keywords and risk_score outputs.
    pub include_title: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_sentences: 4,
            include_title: true,
        }
    }
}

impl AnalyzerConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_sentences: std::env::var("RISKWATCH_MAX_SENTENCES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_sentences),
            include_title: std::env::var("RISKWATCH_INCLUDE_TITLE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.include_title),
        }
    }
}

/// Analyze one article against the company profile.
///
/// Pure function of its arguments: the same article and profile always yield
/// the identical result, which is what makes batch fan-out safe. Articles
/// with blank content are rejected with a `Validation` error so the caller
/// can skip and count them instead of scoring noise.
pub fn analyze_article(
    article: &Article,
    profile: &CompanyProfile,
    config: &AnalyzerConfig,
) -> Result<RiskAnalysis, AppError> {
    if article.content.trim().is_empty() {
        return Err(AppError::Validation(format!(
            "article \"{}\" has empty content",
            article.title
        )));
    }

    let scan_text = if config.include_title {
        format!("{} {}", article.title, article.content)
    } else {
        article.content.clone()
    };

    let (sentiment_label, sentiment_score) = sentiment_service::estimate_sentiment(&scan_text);
    let matches = keyword_service::match_profile(&scan_text, profile);
    let risk_score =
        scoring_service::calculate_risk_score(sentiment_score, &matches.keywords, &matches.categories);

    let mut summary = summarize(&article.content, config.max_sentences);
    if summary.is_empty() {
        // Content made of only very short sentences; fall back to the title.
        summary = truncate_chars(article.title.trim().to_string(), SUMMARY_MAX_CHARS);
    }

    let reasoning = build_reasoning(sentiment_label, &matches.categories, &matches.keywords);

    Ok(RiskAnalysis {
        summary,
        sentiment_label,
        sentiment_score,
        risk_category: matches.categories,
        risk_score,
        matched_keywords: matches.keywords,
        reasoning,
    })
}

/// First `max_sentences` sentences of the text. Naive truncation: split on
/// terminal punctuation, drop fragments under `MIN_SENTENCE_CHARS`, cap at
/// `SUMMARY_MAX_CHARS`. Not abstractive summarization.
fn summarize(text: &str, max_sentences: usize) -> String {
    let boundary = Regex::new(r"[.!?]+").unwrap();

    let sentences: Vec<&str> = boundary
        .split(text)
        .map(str::trim)
        .filter(|s| s.chars().count() >= MIN_SENTENCE_CHARS)
        .take(max_sentences)
        .collect();

    let mut summary = sentences.join(". ");
    if !summary.is_empty() && !summary.ends_with('.') {
        summary.push('.');
    }
    truncate_chars(summary, SUMMARY_MAX_CHARS)
}

/// Template explanation citing tone, triggered categories, and the first few
/// matched keywords, e.g. "The tone is negative and involves operational,
/// regulatory concerns and with keywords: chip shortage, production, lawsuit."
fn build_reasoning(sentiment: Sentiment, categories: &[String], keywords: &[String]) -> String {
    let mut parts = vec![format!("The tone is {}", sentiment)];

    if !categories.is_empty() {
        parts.push(format!("involves {} concerns", categories.join(", ")));
    }

    if !keywords.is_empty() {
        let cited: Vec<&str> = keywords
            .iter()
            .take(REASONING_KEYWORD_LIMIT)
            .map(String::as_str)
            .collect();
        parts.push(format!("with keywords: {}", cited.join(", ")));
    }

    let mut reasoning = parts.join(" and ");
    reasoning.push('.');
    truncate_chars(reasoning, REASONING_MAX_CHARS)
}

fn truncate_chars(s: String, max: usize) -> String {
    if s.chars().count() <= max {
        s
    } else {
        s.chars().take(max).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CompanyIdentity;
    use serde_json::Map;
    use std::collections::BTreeMap;

    fn test_profile() -> CompanyProfile {
        let mut risk_keywords = BTreeMap::new();
        risk_keywords.insert(
            "operational".to_string(),
            vec!["chip shortage".to_string(), "production".to_string()],
        );
        risk_keywords.insert("regulatory".to_string(), vec!["lawsuit".to_string()]);
        CompanyProfile {
            company: CompanyIdentity {
                name: "Apple".to_string(),
                industry: "Technology".to_string(),
                stock_symbol: "AAPL".to_string(),
            },
            risk_keywords,
            competitors: Vec::new(),
            product_keywords: Vec::new(),
            sensitive_topics: Vec::new(),
        }
    }

    fn article(title: &str, content: &str) -> Article {
        Article {
            title: title.to_string(),
            content: content.to_string(),
            source: "test".to_string(),
            published_time: None,
            url: None,
            extra: Map::new(),
        }
    }

    #[test]
    fn test_blank_content_is_a_validation_error() {
        let result = analyze_article(&article("Headline", "   \n"), &test_profile(), &AnalyzerConfig::default());
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_negative_operational_regulatory_article() {
        let content = "Apple faces chip shortage and production delays, citing lawsuit risk";
        let analysis =
            analyze_article(&article("", content), &test_profile(), &AnalyzerConfig::default())
                .unwrap();

        assert_eq!(analysis.sentiment_label, Sentiment::Negative);
        assert!(analysis.sentiment_score < -0.2);
        assert_eq!(analysis.risk_category, vec!["operational", "regulatory"]);
        assert_eq!(
            analysis.matched_keywords,
            vec!["chip shortage", "production", "lawsuit"]
        );

        // min(1.0, |s| + min(0.5, 3*0.1) + 2*0.15)
        let expected =
            (analysis.sentiment_score.abs() + 0.3 + 0.3).min(1.0);
        assert_eq!(analysis.risk_score, expected);
    }

    #[test]
    fn test_positive_article_without_matches() {
        let content = "Strong revenue growth and record profit delighted investors this quarter";
        let analysis =
            analyze_article(&article("", content), &test_profile(), &AnalyzerConfig::default())
                .unwrap();

        assert_eq!(analysis.sentiment_label, Sentiment::Positive);
        assert!(analysis.risk_category.is_empty());
        assert!(analysis.matched_keywords.is_empty());
        assert_eq!(analysis.risk_score, analysis.sentiment_score.abs() * 0.3);
    }

    #[test]
    fn test_title_participates_in_scanning() {
        let profile = test_profile();
        let config = AnalyzerConfig::default();
        let with_title = analyze_article(
            &article("Lawsuit filed against Apple", "The company commented on the case today."),
            &profile,
            &config,
        )
        .unwrap();
        assert_eq!(with_title.risk_category, vec!["regulatory"]);

        let without_title = analyze_article(
            &article("Lawsuit filed against Apple", "The company commented on the case today."),
            &profile,
            &AnalyzerConfig {
                include_title: false,
                ..AnalyzerConfig::default()
            },
        )
        .unwrap();
        assert!(without_title.risk_category.is_empty());
    }

    #[test]
    fn test_analysis_is_idempotent() {
        let art = article(
            "Apple Faces Production Delays",
            "Apple announced significant delays in production due to chip shortage issues. \
             Analysts worry about the supply chain. The company expects recovery next quarter.",
        );
        let profile = test_profile();
        let config = AnalyzerConfig::default();
        let first = analyze_article(&art, &profile, &config).unwrap();
        let second = analyze_article(&art, &profile, &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_summary_takes_leading_sentences() {
        let content = "The first sentence has enough characters to survive. \
                       The second sentence also carries enough weight. \
                       The third sentence is similarly long enough to keep. \
                       The fourth sentence rounds out the summary nicely. \
                       The fifth sentence must not appear in the output.";
        let analysis =
            analyze_article(&article("", content), &test_profile(), &AnalyzerConfig::default())
                .unwrap();
        assert!(analysis.summary.starts_with("The first sentence"));
        assert!(analysis.summary.contains("fourth sentence"));
        assert!(!analysis.summary.contains("fifth sentence"));
        assert!(analysis.summary.ends_with('.'));
        assert!(analysis.summary.chars().count() <= 500);
    }

    #[test]
    fn test_summary_drops_short_fragments_and_falls_back_to_title() {
        let analysis = analyze_article(
            &article("Apple stock update", "Up. Down. Flat."),
            &test_profile(),
            &AnalyzerConfig::default(),
        )
        .unwrap();
        assert_eq!(analysis.summary, "Apple stock update");
    }

    #[test]
    fn test_reasoning_mentions_tone_categories_and_keywords() {
        let content = "Apple faces chip shortage and production delays, citing lawsuit risk";
        let analysis =
            analyze_article(&article("", content), &test_profile(), &AnalyzerConfig::default())
                .unwrap();
        assert_eq!(
            analysis.reasoning,
            "The tone is negative and involves operational, regulatory concerns \
             and with keywords: chip shortage, production, lawsuit."
        );
    }

    #[test]
    fn test_reasoning_without_matches_only_states_tone() {
        let analysis = analyze_article(
            &article("", "A perfectly ordinary announcement about the annual meeting."),
            &test_profile(),
            &AnalyzerConfig::default(),
        )
        .unwrap();
        assert_eq!(analysis.reasoning, "The tone is neutral.");
    }
}

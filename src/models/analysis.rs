use serde::{Deserialize, Serialize};

use super::Article;

/// Sentiment classification for an article.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Neutral => write!(f, "neutral"),
            Sentiment::Negative => write!(f, "negative"),
        }
    }
}

/// Risk assessment for a single article. Immutable once produced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiskAnalysis {
    /// First few sentences of the content, not an abstractive summary.
    pub summary: String,
    pub sentiment_label: Sentiment,
    /// Polarity in [-1.0, 1.0].
    pub sentiment_score: f64,
    /// Triggered categories, ordered by first match.
    pub risk_category: Vec<String>,
    /// Combined score in [0.0, 1.0].
    pub risk_score: f64,
    /// Matched phrases, lowercase, de-duplicated, first-seen order.
    pub matched_keywords: Vec<String>,
    /// Human-readable explanation citing tone, categories and keywords.
    pub reasoning: String,
}

/// Position of an article within the input corpus, for downstream consumers
/// that key off a stable per-article index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleMetadata {
    /// 1-based position within the source channel, counting filtered articles.
    pub article_index: usize,
    pub source_channel: String,
}

/// An input article enriched with its risk assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzedArticle {
    #[serde(flatten)]
    pub article: Article,
    pub risk_analysis: RiskAnalysis,
    #[serde(rename = "_analysis_metadata")]
    pub analysis_metadata: ArticleMetadata,
}

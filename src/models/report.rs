use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use super::{AnalyzedArticle, CompanyIdentity, Sentiment};

/// Provenance and accounting for one full run.
///
/// `analyzed_articles + filtered_articles + failed_articles` always equals
/// `total_input_articles`, so every excluded article is accounted for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    pub run_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub total_input_articles: usize,
    pub analyzed_articles: usize,
    /// Access-denied placeholders excluded by the content filter.
    pub filtered_articles: usize,
    /// Articles rejected with a validation error.
    pub failed_articles: usize,
    /// Channels that contributed articles, in processing order.
    pub data_sources: Vec<String>,
    /// Channels whose documents could not be parsed.
    pub skipped_channels: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SentimentDistribution {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl SentimentDistribution {
    pub fn record(&mut self, sentiment: Sentiment) {
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Neutral => self.neutral += 1,
            Sentiment::Negative => self.negative += 1,
        }
    }
}

/// One entry in the top-N high-risk list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighRiskArticle {
    pub title: String,
    pub risk_score: f64,
    pub risk_category: Vec<String>,
    pub sentiment: Sentiment,
    pub source: String,
}

/// Corpus-level statistics over all analyzed articles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_articles_analyzed: usize,
    pub sentiment_distribution: SentimentDistribution,
    /// Articles per category; an article with two categories counts in both.
    pub risk_category_distribution: BTreeMap<String, usize>,
    pub average_risk_score: f64,
    pub high_risk_articles_count: usize,
    pub top_high_risk_articles: Vec<HighRiskArticle>,
}

/// The complete output document for one run. Write-once; every run is a
/// fresh, total recomputation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub company: CompanyIdentity,
    pub analysis_metadata: AnalysisMetadata,
    pub summary: ReportSummary,
    pub detailed_results: Vec<AnalyzedArticle>,
}

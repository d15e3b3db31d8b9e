use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::Utc;
use uuid::Uuid;

use crate::models::{
    AnalysisMetadata, AnalyzedArticle, BatchReport, CompanyProfile, HighRiskArticle,
    ReportSummary, SentimentDistribution,
};
use crate::services::batch_service::BatchOutcome;
use crate::services::keyword_service::SENSITIVE_CATEGORY;

/// Tunables for report aggregation.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Articles scoring at or above this count as high-risk.
    pub high_risk_threshold: f64,
    /// Entries kept in the top high-risk list.
    pub top_n: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            high_risk_threshold: 0.7,
            top_n: 10,
        }
    }
}

impl ReportConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            high_risk_threshold: std::env::var("RISKWATCH_HIGH_RISK_THRESHOLD")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.high_risk_threshold),
            top_n: std::env::var("RISKWATCH_TOP_N")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.top_n),
        }
    }
}

/// Fold a completed batch into the output report.
///
/// Pure function of its inputs apart from the run id and timestamp stamped
/// into the metadata; all statistics are recomputed wholesale from
/// `detailed_results` on every run.
pub fn build_report(
    profile: &CompanyProfile,
    outcome: BatchOutcome,
    config: &ReportConfig,
) -> BatchReport {
    let summary = summarize_results(profile, &outcome.results, config);

    BatchReport {
        company: profile.company.clone(),
        analysis_metadata: AnalysisMetadata {
            run_id: Uuid::new_v4(),
            analyzed_at: Utc::now(),
            total_input_articles: outcome.total_input_articles,
            analyzed_articles: outcome.results.len(),
            filtered_articles: outcome.filtered_articles,
            failed_articles: outcome.failed_articles,
            data_sources: outcome.data_sources,
            skipped_channels: outcome.skipped_channels,
        },
        summary,
        detailed_results: outcome.results,
    }
}

fn summarize_results(
    profile: &CompanyProfile,
    results: &[AnalyzedArticle],
    config: &ReportConfig,
) -> ReportSummary {
    let mut sentiment_distribution = SentimentDistribution::default();

    // Seed every profile category with zero so an empty corpus still
    // enumerates the taxonomy in its distribution.
    let mut category_distribution: BTreeMap<String, usize> = profile
        .risk_keywords
        .keys()
        .map(|category| (category.clone(), 0))
        .collect();
    if !profile.sensitive_topics.is_empty() {
        category_distribution
            .entry(SENSITIVE_CATEGORY.to_string())
            .or_insert(0);
    }

    let mut score_total = 0.0;
    let mut high_risk_count = 0;

    for entry in results {
        let analysis = &entry.risk_analysis;
        sentiment_distribution.record(analysis.sentiment_label);

        // An article with two categories increments both counters.
        for category in &analysis.risk_category {
            *category_distribution.entry(category.clone()).or_insert(0) += 1;
        }

        score_total += analysis.risk_score;
        if analysis.risk_score >= config.high_risk_threshold {
            high_risk_count += 1;
        }
    }

    let average_risk_score = if results.is_empty() {
        0.0
    } else {
        score_total / results.len() as f64
    };

    ReportSummary {
        total_articles_analyzed: results.len(),
        sentiment_distribution,
        risk_category_distribution: category_distribution,
        average_risk_score,
        high_risk_articles_count: high_risk_count,
        top_high_risk_articles: top_high_risk(results, config.top_n),
    }
}

/// The `top_n` highest-scoring articles. The sort is stable and descending,
/// so equal scores keep their original input order.
fn top_high_risk(results: &[AnalyzedArticle], top_n: usize) -> Vec<HighRiskArticle> {
    let mut ranked: Vec<&AnalyzedArticle> = results.iter().collect();
    ranked.sort_by(|a, b| {
        b.risk_analysis
            .risk_score
            .partial_cmp(&a.risk_analysis.risk_score)
            .unwrap_or(Ordering::Equal)
    });

    ranked
        .into_iter()
        .take(top_n)
        .map(|entry| HighRiskArticle {
            title: entry.article.title.clone(),
            risk_score: entry.risk_analysis.risk_score,
            risk_category: entry.risk_analysis.risk_category.clone(),
            sentiment: entry.risk_analysis.sentiment_label,
            source: entry.article.source.clone(),
        })
        .collect()
}

use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, error, info, warn};

use crate::errors::AppError;
use crate::external::article_provider::ArticleProvider;
use crate::models::{AnalyzedArticle, Article, ArticleMetadata, CompanyProfile};
use crate::services::analyzer_service::{self, AnalyzerConfig};

/// Phrases that mark a scraper error page rather than article content.
const DENIAL_MARKERS: &[&str] = &[
    "access denied",
    "403 forbidden",
    "page not found",
    "enable javascript",
    "captcha",
];

/// Non-empty content shorter than this is treated as a placeholder page.
const MIN_CONTENT_CHARS: usize = 10;

/// How far into the content denial markers are searched.
const DENIAL_SCAN_CHARS: usize = 200;

/// Accounting for one full batch run.
///
/// `results.len() + filtered_articles + failed_articles` equals
/// `total_input_articles` across the channels that parsed.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Analyzed articles in (channel order, within-channel input order).
    pub results: Vec<AnalyzedArticle>,
    pub total_input_articles: usize,
    pub filtered_articles: usize,
    pub failed_articles: usize,
    /// Channels that contributed articles, in processing order.
    pub data_sources: Vec<String>,
    /// Channels skipped because their documents could not be read or parsed.
    pub skipped_channels: Vec<String>,
}

/// Run the analyzer over every article of every channel.
///
/// Channel documents that fail to load are skipped and recorded; per-article
/// validation failures are counted and logged. Neither aborts the batch —
/// only a missing channel listing (no usable input at all) is fatal.
pub async fn process_all(
    provider: &dyn ArticleProvider,
    profile: Arc<CompanyProfile>,
    config: &AnalyzerConfig,
) -> Result<BatchOutcome, AppError> {
    let mut outcome = BatchOutcome::default();

    for channel in provider.list_channels().await? {
        let articles = match provider.fetch_channel(&channel).await {
            Ok(articles) => articles,
            Err(err) => {
                warn!("Skipping channel {}: {}", channel, err);
                outcome.skipped_channels.push(channel);
                continue;
            }
        };

        info!("Processing channel {} ({} articles)", channel, articles.len());
        outcome.total_input_articles += articles.len();
        process_channel(&channel, articles, &profile, config, &mut outcome).await;
        outcome.data_sources.push(channel);
    }

    Ok(outcome)
}

/// Heuristic filter for scraper error placeholders ("Access Denied" stubs):
/// known denial phrases in the title or the head of the content, or content
/// too short to be an article. Filtered articles are counted, not errored.
pub fn is_denial_page(article: &Article) -> bool {
    let title_lower = article.title.to_lowercase();
    let content_head: String = article
        .content
        .to_lowercase()
        .chars()
        .take(DENIAL_SCAN_CHARS)
        .collect();

    if DENIAL_MARKERS
        .iter()
        .any(|marker| title_lower.contains(marker) || content_head.contains(marker))
    {
        return true;
    }

    let trimmed = article.content.trim();
    !trimmed.is_empty() && trimmed.chars().count() < MIN_CONTENT_CHARS
}

/// Fan one channel's articles out as blocking tasks and gather the results.
///
/// Each task carries its 1-based input index; `join_all` yields in spawn
/// order, so the output order is the input order no matter how the tasks
/// interleave. The profile is shared read-only, no locking needed.
async fn process_channel(
    channel: &str,
    articles: Vec<Article>,
    profile: &Arc<CompanyProfile>,
    config: &AnalyzerConfig,
    outcome: &mut BatchOutcome,
) {
    let mut tasks = Vec::new();

    for (position, article) in articles.into_iter().enumerate() {
        let index = position + 1;

        if is_denial_page(&article) {
            debug!("Filtered placeholder article {} #{}", channel, index);
            outcome.filtered_articles += 1;
            continue;
        }

        let profile = Arc::clone(profile);
        let config = config.clone();
        tasks.push(tokio::task::spawn_blocking(move || {
            let analysis = analyzer_service::analyze_article(&article, &profile, &config);
            (index, article, analysis)
        }));
    }

    for joined in join_all(tasks).await {
        match joined {
            Ok((index, article, Ok(analysis))) => {
                outcome.results.push(AnalyzedArticle {
                    article,
                    risk_analysis: analysis,
                    analysis_metadata: ArticleMetadata {
                        article_index: index,
                        source_channel: channel.to_string(),
                    },
                });
            }
            Ok((index, _, Err(err))) => {
                warn!("Article {} #{} not analyzed: {}", channel, index, err);
                outcome.failed_articles += 1;
            }
            Err(err) => {
                error!("Analysis task failed to complete: {}", err);
                outcome.failed_articles += 1;
            }
        }
    }
}

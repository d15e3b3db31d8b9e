use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::Article;

/// Seam to the news-acquisition collaborator.
///
/// Implementations surface scraped article collections grouped by source
/// channel; the engine never knows where the documents came from.
#[async_trait]
pub trait ArticleProvider: Send + Sync {
    /// Channel names in the order they should be processed.
    async fn list_channels(&self) -> Result<Vec<String>, AppError>;

    /// All articles for one channel. Failures here are per-channel: the
    /// batch processor skips the channel and records it.
    async fn fetch_channel(&self, channel: &str) -> Result<Vec<Article>, AppError>;
}

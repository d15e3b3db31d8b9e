use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One scraped news item.
///
/// Scrapers disagree on the content field name (`content`, `content_text`,
/// `article_text`); all three deserialize into `content`. Fields the engine
/// does not model are carried in `extra` and re-serialized unmodified — the
/// engine only ever adds its `risk_analysis` block on output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    #[serde(default)]
    pub title: String,
    #[serde(default, alias = "content_text", alias = "article_text")]
    pub content: String,
    #[serde(default)]
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

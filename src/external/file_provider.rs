use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::info;

use super::article_provider::ArticleProvider;
use crate::errors::AppError;
use crate::models::{Article, BatchReport, CompanyProfile};

/// Article provider over a directory of scraper-produced JSON documents.
///
/// Channel name = file stem. Channels are sorted so a run is reproducible
/// regardless of directory enumeration order.
pub struct FileProvider {
    data_dir: PathBuf,
}

impl FileProvider {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }
}

#[async_trait]
impl ArticleProvider for FileProvider {
    async fn list_channels(&self) -> Result<Vec<String>, AppError> {
        let mut channels = Vec::new();
        let mut entries = tokio::fs::read_dir(&self.data_dir).await?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                channels.push(stem.to_string());
            }
        }

        channels.sort();
        Ok(channels)
    }

    async fn fetch_channel(&self, channel: &str) -> Result<Vec<Article>, AppError> {
        let path = self.data_dir.join(format!("{}.json", channel));
        let raw = tokio::fs::read_to_string(&path).await?;

        serde_json::from_str(&raw)
            .map_err(|e| AppError::InputParse(format!("{}: {}", path.display(), e)))
    }
}

/// Load and validate the company knowledge base. Any failure here is fatal —
/// there is no scoring without a taxonomy.
pub async fn load_company_profile(path: impl AsRef<Path>) -> Result<CompanyProfile, AppError> {
    let path = path.as_ref();

    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| AppError::KnowledgeBase(format!("cannot read {}: {}", path.display(), e)))?;

    let profile: CompanyProfile = serde_json::from_str(&raw)
        .map_err(|e| AppError::KnowledgeBase(format!("malformed {}: {}", path.display(), e)))?;

    if profile.company.name.trim().is_empty() {
        return Err(AppError::KnowledgeBase(format!(
            "{}: company name is empty",
            path.display()
        )));
    }

    info!(
        "Loaded knowledge base for {} ({} risk categories, {} competitors)",
        profile.company.name,
        profile.risk_keywords.len(),
        profile.competitors.len()
    );
    Ok(profile)
}

/// Serialize the report document, pretty-printed. Replaces any previous run's
/// output; there is no incremental mode.
pub async fn write_report(path: impl AsRef<Path>, report: &BatchReport) -> Result<(), AppError> {
    let path = path.as_ref();

    let body = serde_json::to_string_pretty(report)
        .map_err(|e| AppError::Validation(format!("report serialization: {}", e)))?;
    tokio::fs::write(path, body).await?;

    info!("Report saved to {}", path.display());
    Ok(())
}

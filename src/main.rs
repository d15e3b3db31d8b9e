use std::sync::Arc;

use anyhow::Context;

use riskwatch::external::file_provider::{self, FileProvider};
use riskwatch::logging::{init_logging, LoggingConfig};
use riskwatch::services::analyzer_service::AnalyzerConfig;
use riskwatch::services::report_service::{self, ReportConfig};
use riskwatch::services::batch_service;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    init_logging(LoggingConfig::from_env())?;

    // Positional arguments override env vars: riskwatch [knowledge] [data_dir] [report]
    let args: Vec<String> = std::env::args().collect();
    let knowledge_path = arg_or_env(&args, 1, "RISKWATCH_KNOWLEDGE", "knowledge/company.json");
    let data_dir = arg_or_env(&args, 2, "RISKWATCH_DATA_DIR", "data");
    let report_path = arg_or_env(&args, 3, "RISKWATCH_REPORT", "risk_assessment_results.json");

    let profile = Arc::new(
        file_provider::load_company_profile(&knowledge_path)
            .await
            .context("failed to load the company knowledge base")?,
    );
    tracing::info!("🚀 Starting risk analysis for {}", profile.company.name);

    let provider = FileProvider::new(&data_dir);
    let analyzer_config = AnalyzerConfig::from_env();
    let report_config = ReportConfig::from_env();

    let outcome = batch_service::process_all(&provider, Arc::clone(&profile), &analyzer_config)
        .await
        .with_context(|| format!("failed to process article documents in {}", data_dir))?;

    let report = report_service::build_report(&profile, outcome, &report_config);

    let metadata = &report.analysis_metadata;
    tracing::info!(
        "Analyzed {} of {} articles ({} filtered, {} failed, {} channels skipped)",
        metadata.analyzed_articles,
        metadata.total_input_articles,
        metadata.filtered_articles,
        metadata.failed_articles,
        metadata.skipped_channels.len()
    );
    tracing::info!(
        "Average risk score {:.2}, {} high-risk articles",
        report.summary.average_risk_score,
        report.summary.high_risk_articles_count
    );

    file_provider::write_report(&report_path, &report)
        .await
        .with_context(|| format!("failed to write report to {}", report_path))?;

    Ok(())
}

fn arg_or_env(args: &[String], position: usize, var: &str, fallback: &str) -> String {
    args.get(position)
        .cloned()
        .or_else(|| std::env::var(var).ok())
        .unwrap_or_else(|| fallback.to_string())
}

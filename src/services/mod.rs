pub mod analyzer_service;
pub mod batch_service;
pub mod keyword_service;
pub mod report_service;
pub mod scoring_service;
pub mod sentiment_service;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identity fields of the target company, echoed into every report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyIdentity {
    pub name: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub stock_symbol: String,
}

/// Static risk taxonomy for the target company.
///
/// Loaded once from the knowledge-base document, then shared read-only across
/// concurrent analyses — never a module-level singleton. `risk_keywords` maps
/// category name (financial, operational, competitive, regulatory, sensitive
/// by convention, but open-ended) to the phrases that trigger it. A BTreeMap
/// keeps the category scan order fixed regardless of document key order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub company: CompanyIdentity,
    #[serde(default)]
    pub risk_keywords: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub competitors: Vec<String>,
    #[serde(default)]
    pub product_keywords: Vec<String>,
    #[serde(default)]
    pub sensitive_topics: Vec<String>,
}

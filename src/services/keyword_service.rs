use std::collections::HashSet;

use crate::models::CompanyProfile;

/// Category label assigned to sensitive-topic matches.
pub const SENSITIVE_CATEGORY: &str = "sensitive";

/// Outcome of scanning one text against the company taxonomy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordMatches {
    /// Matched phrases, lowercase, de-duplicated, first-seen order.
    pub keywords: Vec<String>,
    /// Triggered categories, ordered by first match.
    pub categories: Vec<String>,
}

/// Scan text against the profile taxonomy.
///
/// Exact case-insensitive phrase containment only; no stemming or fuzzy
/// matching, so minor rewordings of a taxonomy phrase are missed (known
/// limitation). Scan order is fixed: risk-keyword categories in
/// lexicographic order with keywords in document order, then sensitive
/// topics, then product terms, then competitor names.
pub fn match_profile(text: &str, profile: &CompanyProfile) -> KeywordMatches {
    let text_lower = text.to_lowercase();
    let mut matches = KeywordMatches::default();
    let mut seen: HashSet<String> = HashSet::new();

    for (category, keywords) in &profile.risk_keywords {
        for keyword in keywords {
            let keyword_lower = keyword.to_lowercase();
            if text_lower.contains(&keyword_lower) {
                if seen.insert(keyword_lower.clone()) {
                    matches.keywords.push(keyword_lower);
                }
                trigger_category(&mut matches.categories, category);
            }
        }
    }

    for topic in &profile.sensitive_topics {
        let topic_lower = topic.to_lowercase();
        if text_lower.contains(&topic_lower) {
            if seen.insert(topic_lower.clone()) {
                matches.keywords.push(topic_lower);
            }
            trigger_category(&mut matches.categories, SENSITIVE_CATEGORY);
        }
    }

    for term in &profile.product_keywords {
        let term_lower = term.to_lowercase();
        if text_lower.contains(&term_lower) && seen.insert(term_lower.clone()) {
            matches.keywords.push(term_lower);
        }
    }

    for name in &profile.competitors {
        let name_lower = name.to_lowercase();
        if text_lower.contains(&name_lower) && seen.insert(name_lower.clone()) {
            matches.keywords.push(format!("competitor: {}", name_lower));
        }
    }

    matches
}

fn trigger_category(categories: &mut Vec<String>, category: &str) {
    if !categories.iter().any(|c| c == category) {
        categories.push(category.to_string());
    }
}

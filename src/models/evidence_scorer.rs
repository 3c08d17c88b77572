use std::collections::HashSet;

use crate::models::{ClassifierConfig, CompanyRecord, TaxonomyEntry};
use crate::types::{EvidenceScore, ReasonList};
use crate::utils::{normalize_text, parse_tag_list};

/// Evidence gathered for one (company, label) pair: the weighted score and
/// one reason string per contributing match. Transient; the classifier
/// discards it after aggregation.
#[derive(Debug, Clone, Default)]
pub struct EvidenceResult {
    pub score: EvidenceScore,
    pub reasons: ReasonList,
}

/// Scores a single taxonomy entry against a company record.
///
/// All comparisons are exact whitespace-token equality, never substring
/// containment. Substring matching was tried first and produced far too
/// many false positives (e.g. "install" hiding inside "installation").
pub struct EvidenceScorer<'a> {
    config: &'a ClassifierConfig,
}

impl<'a> EvidenceScorer<'a> {
    pub fn new(config: &'a ClassifierConfig) -> Self {
        Self { config }
    }

    /// Pure function of the entry and record; the rules below are evaluated
    /// independently and additively, so one keyword can contribute under
    /// several rules.
    pub fn score(&self, entry: &TaxonomyEntry, record: &CompanyRecord) -> EvidenceResult {
        let mut score = 0;
        let mut reasons = Vec::new();

        let description = normalize_text(record.description());
        let category = normalize_text(record.category());
        let niche = normalize_text(record.niche());
        let business_tags = parse_tag_list(record.business_tags());

        let description_tokens: HashSet<&str> = description.split_whitespace().collect();
        let category_tokens: HashSet<&str> = category.split_whitespace().collect();
        let niche_tokens: HashSet<&str> = niche.split_whitespace().collect();

        // 1. Business tags (strongest signal). A tag contributes at most
        // once: stop scanning keywords after the first hit for that tag.
        for tag in &business_tags {
            let tag_tokens: HashSet<&str> = tag.split_whitespace().collect();
            for keyword in &entry.keywords {
                if tag_tokens.contains(keyword.as_str()) {
                    score += self.config.business_tag_weight;
                    reasons.push(format!("Matched '{}' in business tag", keyword));
                    break;
                }
            }
        }

        // 2. Category / niche. A keyword present in both fields still
        // contributes only once.
        for keyword in &entry.keywords {
            if category_tokens.contains(keyword.as_str()) || niche_tokens.contains(keyword.as_str())
            {
                score += self.config.field_match_weight;
                reasons.push(format!("Matched '{}' in category/niche", keyword));
            }
        }

        // 3. Description (weakest signal).
        for keyword in &entry.keywords {
            if description_tokens.contains(keyword.as_str()) {
                score += self.config.description_match_weight;
                reasons.push(format!("Matched '{}' in description", keyword));
            }
        }

        EvidenceResult { score, reasons }
    }
}

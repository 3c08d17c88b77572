use crate::constants::STOP_WORDS;
use crate::models::ClassifierConfig;
use crate::types::{Keyword, TaxonomyLabel};
use crate::utils::{dedup_preserving_order, normalize_label};

/// One taxonomy label prepared for matching.
#[derive(Debug, Clone)]
pub struct TaxonomyEntry {
    /// Original label string, preserved for output.
    pub label: TaxonomyLabel,
    /// Lowercased label with `-`, `/`, `,`, `&` replaced by spaces.
    pub normalized: String,
    /// Matchable tokens in first-occurrence order, deduplicated.
    pub keywords: Vec<Keyword>,
}

/// Ordered index over all taxonomy labels.
///
/// Iteration order is the order labels appeared in the source. The
/// classifier's label cap truncates by this order, so the index must never
/// be rebuilt on top of an unordered map.
#[derive(Debug, Clone, Default)]
pub struct TaxonomyIndex {
    entries: Vec<TaxonomyEntry>,
}

impl TaxonomyIndex {
    /// Builds the index once at startup. The index is read-only afterwards
    /// and safe to share by reference.
    pub fn build(labels: &[TaxonomyLabel], config: &ClassifierConfig) -> Self {
        let entries = labels
            .iter()
            .map(|label| {
                let normalized = normalize_label(label);
                let keywords = extract_keywords(&normalized, config);
                TaxonomyEntry {
                    label: label.clone(),
                    normalized,
                    keywords,
                }
            })
            .collect();

        Self { entries }
    }

    pub fn entries(&self) -> &[TaxonomyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Keywords are the normalized label's whitespace tokens minus stop words,
/// keeping only tokens of at least `min_keyword_length` characters.
fn extract_keywords(normalized: &str, config: &ClassifierConfig) -> Vec<Keyword> {
    let tokens: Vec<Keyword> = normalized
        .split_whitespace()
        .filter(|token| !STOP_WORDS.contains(token))
        .filter(|token| token.chars().count() >= config.min_keyword_length)
        .map(|token| token.to_string())
        .collect();

    dedup_preserving_order(&tokens)
}

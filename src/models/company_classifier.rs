use std::fmt;

use crate::constants::{NO_EVIDENCE_REASON, UNCLEAR_LABEL};
use crate::models::{ClassifierConfig, CompanyRecord, EvidenceScorer, TaxonomyIndex};
use crate::types::{ReasonList, TaxonomyLabel};
use crate::utils::dedup_preserving_order;

/// Coarse confidence bucket derived from the maximum evidence score among
/// matched labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "high",
            ConfidenceLevel::Medium => "medium",
            ConfidenceLevel::Low => "low",
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Final classification for one company record.
#[derive(Debug, Clone)]
pub struct ClassificationResult {
    /// Matched labels (original strings), capped at `max_labels`, in
    /// taxonomy-index order. Empty when nothing reached the threshold.
    pub labels: Vec<TaxonomyLabel>,
    /// Reasons across all matched labels, deduplicated, first occurrence
    /// first. Collected before the label cap, so reasons from capped-out
    /// labels survive.
    pub reasons: ReasonList,
    pub confidence: ConfidenceLevel,
}

impl ClassificationResult {
    fn unclear() -> Self {
        Self {
            labels: Vec::new(),
            reasons: vec![NO_EVIDENCE_REASON.to_string()],
            confidence: ConfidenceLevel::Low,
        }
    }

    pub fn is_unclear(&self) -> bool {
        self.labels.is_empty()
    }

    /// `;`-joined matched labels, or the "Unclear" sentinel.
    pub fn label_field(&self) -> String {
        if self.labels.is_empty() {
            UNCLEAR_LABEL.to_string()
        } else {
            self.labels.join(";")
        }
    }

    /// `;`-joined reasons.
    pub fn reason_field(&self) -> String {
        self.reasons.join(";")
    }

    pub fn confidence_field(&self) -> &'static str {
        self.confidence.as_str()
    }
}

/// Aggregates per-label evidence for one company into the final label set,
/// confidence tier, and reasoning.
pub struct CompanyClassifier<'a> {
    taxonomy_index: &'a TaxonomyIndex,
    config: &'a ClassifierConfig,
    evidence_scorer: EvidenceScorer<'a>,
}

impl<'a> CompanyClassifier<'a> {
    pub fn new(taxonomy_index: &'a TaxonomyIndex, config: &'a ClassifierConfig) -> Self {
        Self {
            taxonomy_index,
            config,
            evidence_scorer: EvidenceScorer::new(config),
        }
    }

    pub fn classify(&self, record: &CompanyRecord) -> ClassificationResult {
        let mut matched_labels: Vec<TaxonomyLabel> = Vec::new();
        let mut matched_reasons: ReasonList = Vec::new();
        let mut max_score = 0;

        for entry in self.taxonomy_index.entries() {
            let evidence = self.evidence_scorer.score(entry, record);
            if evidence.score >= self.config.min_evidence_score {
                matched_labels.push(entry.label.clone());
                matched_reasons.extend(evidence.reasons);
                max_score = max_score.max(evidence.score);
            }
        }

        if matched_labels.is_empty() {
            return ClassificationResult::unclear();
        }

        let confidence = if max_score >= self.config.high_confidence_score {
            ConfidenceLevel::High
        } else if max_score >= self.config.medium_confidence_score {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        };

        // Labels are capped by index order, not ranked by score.
        matched_labels.truncate(self.config.max_labels);

        ClassificationResult {
            labels: matched_labels,
            reasons: dedup_preserving_order(&matched_reasons),
            confidence,
        }
    }
}

use std::fmt;

use crate::types::EvidenceScore;

/// Tunable scoring and selection parameters.
///
/// This is process-wide, read-only configuration: construct one value (or
/// use [`crate::DEFAULT_CLASSIFIER_CONFIG`]) at startup and pass it by
/// reference. Nothing mutates it after that.
#[derive(Debug, Clone, Copy)]
pub struct ClassifierConfig {
    /// Minimum evidence score a label needs to count as a match.
    pub min_evidence_score: EvidenceScore,
    /// Minimum character count for a label token to become a keyword.
    pub min_keyword_length: usize,
    /// Max-score floor for the "high" confidence tier.
    pub high_confidence_score: EvidenceScore,
    /// Max-score floor for the "medium" confidence tier.
    pub medium_confidence_score: EvidenceScore,
    /// Cap on matched labels reported per company.
    pub max_labels: usize,
    /// Score added when a keyword matches a business tag token.
    pub business_tag_weight: EvidenceScore,
    /// Score added when a keyword matches a category or niche token.
    pub field_match_weight: EvidenceScore,
    /// Score added when a keyword matches a description token.
    pub description_match_weight: EvidenceScore,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        crate::constants::DEFAULT_CLASSIFIER_CONFIG
    }
}

impl fmt::Display for ClassifierConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ClassifierConfig (\n\tmin_evidence_score: {},\n\tmin_keyword_length: {},\n\thigh_confidence_score: {},\n\tmedium_confidence_score: {},\n\tmax_labels: {},\n\tbusiness_tag_weight: {},\n\tfield_match_weight: {},\n\tdescription_match_weight: {}\n)",
            self.min_evidence_score,
            self.min_keyword_length,
            self.high_confidence_score,
            self.medium_confidence_score,
            self.max_labels,
            self.business_tag_weight,
            self.field_match_weight,
            self.description_match_weight
        )
    }
}

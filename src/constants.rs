use crate::models::ClassifierConfig;

/// Tokens that never become keywords. These are words so common across the
/// taxonomy that matching on them tags nearly every company.
pub const STOP_WORDS: &[&str] = &[
    "and",
    "or",
    "the",
    "of",
    "for",
    "with",
    "services",
    "service",
    "installation",
    "install",
    "production",
    "manufacturing",
    "management",
    "operations",
    "solutions",
    "systems",
    "e",
];

/// Sentinel label emitted when no taxonomy label reaches the evidence
/// threshold.
pub const UNCLEAR_LABEL: &str = "Unclear";

/// Reason string accompanying [`UNCLEAR_LABEL`].
pub const NO_EVIDENCE_REASON: &str = "No sufficient evidence found for any taxonomy label";

pub const DEFAULT_CLASSIFIER_CONFIG: ClassifierConfig = ClassifierConfig {
    min_evidence_score: 3,
    min_keyword_length: 5,
    high_confidence_score: 6,
    medium_confidence_score: 4,
    max_labels: 3,
    business_tag_weight: 2,
    field_match_weight: 1,
    description_match_weight: 1,
};

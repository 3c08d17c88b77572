mod constants;
pub mod models;
pub use constants::{DEFAULT_CLASSIFIER_CONFIG, NO_EVIDENCE_REASON, STOP_WORDS, UNCLEAR_LABEL};
pub use models::{
    BatchProcessor, BatchSummary, ClassificationResult, ClassifierConfig, CompanyClassifier,
    CompanyRecord, ConfidenceLevel, Error, EvidenceResult, EvidenceScorer, TaxonomyEntry,
    TaxonomyIndex, DEFAULT_CHUNK_SIZE, OFFICIAL_OUTPUT_FILE_NAME, REASONING_OUTPUT_FILE_NAME,
};
pub mod types;
mod utils;
pub use types::{
    BusinessTag, EvidenceScore, Keyword, ReasonList, TaxonomyLabel, TaxonomyLabelList,
};
pub use utils::{
    normalize_label, normalize_text, parse_tag_list, read_taxonomy_labels,
    read_taxonomy_labels_from_path,
};

/// Classifies a single company record against the taxonomy index using the
/// default configuration.
pub fn classify_company(
    record: &CompanyRecord,
    taxonomy_index: &TaxonomyIndex,
) -> ClassificationResult {
    classify_company_with_custom_config(record, taxonomy_index, &DEFAULT_CLASSIFIER_CONFIG)
}

/// Same as [`classify_company`], with caller-provided tuning. The config
/// must be the one the index was built with, otherwise keyword filtering
/// and scoring disagree on thresholds.
pub fn classify_company_with_custom_config(
    record: &CompanyRecord,
    taxonomy_index: &TaxonomyIndex,
    config: &ClassifierConfig,
) -> ClassificationResult {
    CompanyClassifier::new(taxonomy_index, config).classify(record)
}

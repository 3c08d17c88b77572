pub mod batch_processor;
pub use batch_processor::{
    BatchProcessor, BatchSummary, DEFAULT_CHUNK_SIZE, OFFICIAL_OUTPUT_FILE_NAME,
    REASONING_OUTPUT_FILE_NAME,
};

pub mod classifier_config;
pub use classifier_config::ClassifierConfig;

pub mod company_classifier;
pub use company_classifier::{ClassificationResult, CompanyClassifier, ConfidenceLevel};

pub mod company_record;
pub use company_record::CompanyRecord;

pub mod error;
pub use error::Error;

pub mod evidence_scorer;
pub use evidence_scorer::{EvidenceResult, EvidenceScorer};

pub mod taxonomy_index;
pub use taxonomy_index::{TaxonomyEntry, TaxonomyIndex};

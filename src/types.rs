// Types listed here are either shared across multiple files and/or exposed via the library.

/// An original taxonomy label string, exactly as it appears in the taxonomy
/// source. Labels are unique and double as identifiers; output always uses
/// this original form, never the normalized one.
pub type TaxonomyLabel = String;

/// The raw taxonomy labels, in taxonomy-source order. The order is
/// load-bearing: the classifier caps matched labels by index order.
pub type TaxonomyLabelList = Vec<TaxonomyLabel>;

/// A normalized, stop-word-filtered, length-filtered token derived from a
/// taxonomy label. Keywords are the only things ever matched against
/// company fields.
pub type Keyword = String;

/// Weighted count of keyword matches for a label against one company's
/// fields.
pub type EvidenceScore = u32;

/// Ordered list of human-readable match explanations.
pub type ReasonList = Vec<String>;

/// A normalized business tag parsed from the `business_tags` field.
pub type BusinessTag = String;

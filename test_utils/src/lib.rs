use std::env;
use std::error::Error;
use std::path::{Path, PathBuf};
use std::process;

use csv::Reader;
use taxonomy_tagger::{TaxonomyIndex, DEFAULT_CLASSIFIER_CONFIG};

/// Utility to load taxonomy labels from a single-column CSV file for
/// testing and benchmarking.
pub fn load_taxonomy_from_file(file_path: &str) -> Result<Vec<String>, Box<dyn Error>> {
    let mut reader = Reader::from_path(file_path)?;

    let mut labels = Vec::new();
    for record in reader.records() {
        let record = record?;
        if let Some(label) = record.get(0) {
            if !label.trim().is_empty() {
                labels.push(label.trim().to_string());
            }
        }
    }

    Ok(labels)
}

/// Loads the taxonomy file and builds an index with the default
/// configuration.
pub fn build_index_from_file(file_path: &str) -> Result<TaxonomyIndex, Box<dyn Error>> {
    let labels = load_taxonomy_from_file(file_path)?;
    Ok(TaxonomyIndex::build(&labels, &DEFAULT_CLASSIFIER_CONFIG))
}

/// Reads a whole CSV file into (headers, rows) for assertions.
pub fn read_csv_rows(file_path: &Path) -> Result<(Vec<String>, Vec<Vec<String>>), Box<dyn Error>> {
    let mut reader = Reader::from_path(file_path)?;

    let headers = reader
        .headers()?
        .iter()
        .map(|header| header.to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|value| value.to_string()).collect());
    }

    Ok((headers, rows))
}

/// A per-process scratch directory for batch-output assertions. Callers
/// remove it when done.
pub fn temp_output_dir(tag: &str) -> PathBuf {
    env::temp_dir().join(format!("taxonomy_tagger_test_{}_{}", tag, process::id()))
}

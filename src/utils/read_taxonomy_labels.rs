use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crate::models::Error;
use crate::types::TaxonomyLabelList;
use crate::utils::open_input;

/// Reads taxonomy labels from a single-column tabular source: one label per
/// row, first column, header row expected. Blank cells are skipped. Extra
/// columns, if any, are ignored.
pub fn read_taxonomy_labels<R: Read>(input: R) -> Result<TaxonomyLabelList, Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let mut labels = TaxonomyLabelList::new();
    for row in reader.records() {
        let row = row.map_err(|e| Error::ParserError(format!("Failed to read taxonomy row: {}", e)))?;

        if let Some(label) = row.get(0) {
            let label = label.trim();
            if !label.is_empty() {
                labels.push(label.to_string());
            }
        }
    }

    Ok(labels)
}

/// Same as [`read_taxonomy_labels`], opening the path gzip-aware.
pub fn read_taxonomy_labels_from_path(path: &Path) -> Result<TaxonomyLabelList, Error> {
    read_taxonomy_labels(open_input(path)?)
}

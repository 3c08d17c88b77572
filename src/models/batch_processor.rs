use std::fs::{self, File};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Writer};
use log::info;

use crate::models::{ClassifierConfig, CompanyClassifier, CompanyRecord, Error, TaxonomyIndex};
use crate::utils::open_input;

/// Rows processed per chunk. The current datasets are small; chunking keeps
/// memory flat for larger ones.
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Official output: original columns plus `insurance_label`.
pub const OFFICIAL_OUTPUT_FILE_NAME: &str = "classified_companies.csv";

/// Reasoning output: original columns plus all three classification fields,
/// kept for audit/debugging.
pub const REASONING_OUTPUT_FILE_NAME: &str = "classified_companies_reasoning.csv";

/// Totals reported after a batch run.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchSummary {
    pub rows_processed: usize,
    pub chunks: usize,
}

/// Streams a company dataset through the classifier and writes the official
/// and reasoning output tables.
pub struct BatchProcessor<'a> {
    classifier: CompanyClassifier<'a>,
    chunk_size: usize,
}

impl<'a> BatchProcessor<'a> {
    pub fn new(taxonomy_index: &'a TaxonomyIndex, config: &'a ClassifierConfig) -> Self {
        Self {
            classifier: CompanyClassifier::new(taxonomy_index, config),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// Processes the companies file chunk by chunk, in input order, and
    /// writes both output tables under `output_dir`. Pre-existing outputs
    /// are truncated. Input paths ending in `.gz` are decompressed on the
    /// fly.
    pub fn run(&self, companies_path: &Path, output_dir: &Path) -> Result<BatchSummary, Error> {
        fs::create_dir_all(output_dir)?;

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(open_input(companies_path)?);
        let headers = reader.headers()?.clone();

        let mut official_writer = Writer::from_path(output_dir.join(OFFICIAL_OUTPUT_FILE_NAME))?;
        let mut reasoning_writer = Writer::from_path(output_dir.join(REASONING_OUTPUT_FILE_NAME))?;

        // Headers go out once, before the first chunk.
        let mut official_headers = headers.clone();
        official_headers.push_field("insurance_label");
        official_writer.write_record(&official_headers)?;

        let mut reasoning_headers = headers.clone();
        reasoning_headers.push_field("insurance_label");
        reasoning_headers.push_field("insurance_reason");
        reasoning_headers.push_field("insurance_confidence");
        reasoning_writer.write_record(&reasoning_headers)?;

        let mut summary = BatchSummary::default();
        let mut chunk: Vec<StringRecord> = Vec::with_capacity(self.chunk_size);

        for row in reader.records() {
            chunk.push(row?);
            if chunk.len() == self.chunk_size {
                self.process_chunk(
                    &headers,
                    &chunk,
                    &mut official_writer,
                    &mut reasoning_writer,
                    &mut summary,
                )?;
                chunk.clear();
            }
        }

        if !chunk.is_empty() {
            self.process_chunk(
                &headers,
                &chunk,
                &mut official_writer,
                &mut reasoning_writer,
                &mut summary,
            )?;
        }

        official_writer.flush()?;
        reasoning_writer.flush()?;

        Ok(summary)
    }

    fn process_chunk(
        &self,
        headers: &StringRecord,
        rows: &[StringRecord],
        official_writer: &mut Writer<File>,
        reasoning_writer: &mut Writer<File>,
        summary: &mut BatchSummary,
    ) -> Result<(), Error> {
        summary.chunks += 1;
        info!("Processing chunk {}...", summary.chunks);

        for row in rows {
            let record = CompanyRecord::from_csv_row(headers, row);
            let result = self.classifier.classify(&record);

            let mut official_row = row.clone();
            official_row.push_field(&result.label_field());
            official_writer.write_record(&official_row)?;

            let mut reasoning_row = row.clone();
            reasoning_row.push_field(&result.label_field());
            reasoning_row.push_field(&result.reason_field());
            reasoning_row.push_field(result.confidence_field());
            reasoning_writer.write_record(&reasoning_row)?;

            summary.rows_processed += 1;
        }

        Ok(())
    }
}

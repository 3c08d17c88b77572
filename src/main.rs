use std::env;
use std::path::PathBuf;
use std::process;

use log::{error, info};
use taxonomy_tagger::{
    read_taxonomy_labels_from_path, BatchProcessor, TaxonomyIndex, DEFAULT_CLASSIFIER_CONFIG,
    OFFICIAL_OUTPUT_FILE_NAME, REASONING_OUTPUT_FILE_NAME,
};

const DEFAULT_COMPANIES_PATH: &str = "data_in/companies.csv";
const DEFAULT_TAXONOMY_PATH: &str = "data_in/insurance_taxonomy.csv";
const DEFAULT_OUTPUT_DIR: &str = "data_out";

fn main() {
    // Initialize the logger
    env_logger::init();

    // Positional overrides: companies path, taxonomy path, output dir
    let mut args = env::args().skip(1);
    let companies_path =
        PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_COMPANIES_PATH.to_string()));
    let taxonomy_path =
        PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_TAXONOMY_PATH.to_string()));
    let output_dir = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string()));

    info!("Loading taxonomy from {}", taxonomy_path.display());
    let labels = match read_taxonomy_labels_from_path(&taxonomy_path) {
        Ok(labels) => labels,
        Err(e) => {
            error!("Failed to load taxonomy: {}", e);
            process::exit(1);
        }
    };

    info!("Building label index ({} labels)...", labels.len());
    let taxonomy_index = TaxonomyIndex::build(&labels, &DEFAULT_CLASSIFIER_CONFIG);

    info!("Starting company processing...");
    let processor = BatchProcessor::new(&taxonomy_index, &DEFAULT_CLASSIFIER_CONFIG);

    match processor.run(&companies_path, &output_dir) {
        Ok(summary) => {
            info!(
                "Processing finished: {} rows in {} chunks",
                summary.rows_processed, summary.chunks
            );
            println!(
                "Official output: {}",
                output_dir.join(OFFICIAL_OUTPUT_FILE_NAME).display()
            );
            println!(
                "Reasoning output: {}",
                output_dir.join(REASONING_OUTPUT_FILE_NAME).display()
            );
        }
        Err(e) => {
            error!("Error processing companies: {}", e);
            process::exit(1);
        }
    }
}

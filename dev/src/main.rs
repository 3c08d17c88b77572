use log::info;
use taxonomy_tagger::{classify_company, CompanyRecord, TaxonomyIndex, DEFAULT_CLASSIFIER_CONFIG};

// Scratch runner for poking at the classifier during development.
fn main() {
    env_logger::init();

    info!("{}", DEFAULT_CLASSIFIER_CONFIG);

    let labels = vec![
        "Tree Services - Pruning / Removal".to_string(),
        "Landscaping Services".to_string(),
        "Commercial Roofing".to_string(),
    ];
    let taxonomy_index = TaxonomyIndex::build(&labels, &DEFAULT_CLASSIFIER_CONFIG);

    for entry in taxonomy_index.entries() {
        info!("{} -> {:?}", entry.label, entry.keywords);
    }

    let mut record = CompanyRecord::new();
    record.set(
        "description",
        "Tree pruning and stump removal for residential clients",
    );
    record.set("business_tags", "['Tree Pruning', 'Stump Removal']");
    record.set("category", "tree services");
    record.set("niche", "tree pruning");

    let result = classify_company(&record, &taxonomy_index);

    println!("label: {}", result.label_field());
    println!("confidence: {}", result.confidence_field());
    for reason in &result.reasons {
        println!("  - {}", reason);
    }
}

use taxonomy_tagger::{classify_company, CompanyRecord, TaxonomyIndex, DEFAULT_CLASSIFIER_CONFIG};

fn main() {
    env_logger::init();

    let labels = vec![
        "Tree Services - Pruning / Removal".to_string(),
        "Commercial Roofing".to_string(),
    ];
    let taxonomy_index = TaxonomyIndex::build(&labels, &DEFAULT_CLASSIFIER_CONFIG);

    let mut record = CompanyRecord::new();
    record.set(
        "description",
        "Tree pruning and stump removal for residential clients",
    );
    record.set("business_tags", "['Tree Pruning', 'Stump Removal']");

    let result = classify_company(&record, &taxonomy_index);

    println!("Labels: {}", result.label_field());
    println!("Confidence: {}", result.confidence_field());
    for reason in &result.reasons {
        println!("  - {}", reason);
    }
}


use taxonomy_tagger::{
    classify_company, classify_company_with_custom_config, ClassifierConfig, ConfidenceLevel,
    EvidenceScorer, DEFAULT_CLASSIFIER_CONFIG, NO_EVIDENCE_REASON, UNCLEAR_LABEL,
};
use crate::test_utils::{build_index, make_record};

#[cfg(test)]
mod evidence_scorer_tests {
    use super::*;

    #[test]
    fn test_business_tag_match_scores_two() {
        let index = build_index(&["Excavation Contractors"]);
        let record = make_record(&[("business_tags", "['Excavation']")]);

        let scorer = EvidenceScorer::new(&DEFAULT_CLASSIFIER_CONFIG);
        let evidence = scorer.score(&index.entries()[0], &record);

        assert_eq!(evidence.score, 2);
        assert_eq!(
            evidence.reasons,
            vec!["Matched 'excavation' in business tag"]
        );
    }

    #[test]
    fn test_tag_contributes_at_most_once() {
        // Both keywords appear in the same tag; scanning stops after the
        // first hit, so the tag still only counts once.
        let index = build_index(&["Excavation Contractors"]);
        let record = make_record(&[("business_tags", "['Excavation Contractors']")]);

        let scorer = EvidenceScorer::new(&DEFAULT_CLASSIFIER_CONFIG);
        let evidence = scorer.score(&index.entries()[0], &record);

        assert_eq!(evidence.score, 2);
        assert_eq!(evidence.reasons.len(), 1);
    }

    #[test]
    fn test_each_distinct_tag_contributes() {
        let index = build_index(&["Excavation Contractors"]);
        let record = make_record(&[("business_tags", "['Excavation', 'Contractors On Site']")]);

        let scorer = EvidenceScorer::new(&DEFAULT_CLASSIFIER_CONFIG);
        let evidence = scorer.score(&index.entries()[0], &record);

        assert_eq!(evidence.score, 4);
    }

    #[test]
    fn test_substring_never_matches() {
        // "roofing" is contained in "waterproofing" but is not a whitespace
        // token of it.
        let index = build_index(&["Commercial Roofing"]);
        let record = make_record(&[
            ("description", "waterproofing specialists"),
            ("business_tags", "['Waterproofing']"),
            ("category", "waterproofing"),
        ]);

        let scorer = EvidenceScorer::new(&DEFAULT_CLASSIFIER_CONFIG);
        let evidence = scorer.score(&index.entries()[0], &record);

        assert_eq!(evidence.score, 0);
        assert!(evidence.reasons.is_empty());
    }

    #[test]
    fn test_keyword_in_category_and_niche_counts_once() {
        let index = build_index(&["Excavation Contractors"]);
        let record = make_record(&[("category", "excavation work"), ("niche", "excavation")]);

        let scorer = EvidenceScorer::new(&DEFAULT_CLASSIFIER_CONFIG);
        let evidence = scorer.score(&index.entries()[0], &record);

        assert_eq!(evidence.score, 1);
        assert_eq!(
            evidence.reasons,
            vec!["Matched 'excavation' in category/niche"]
        );
    }

    #[test]
    fn test_description_match_scores_one() {
        let index = build_index(&["Excavation Contractors"]);
        let record = make_record(&[("description", "Excavation for foundations")]);

        let scorer = EvidenceScorer::new(&DEFAULT_CLASSIFIER_CONFIG);
        let evidence = scorer.score(&index.entries()[0], &record);

        assert_eq!(evidence.score, 1);
        assert_eq!(evidence.reasons, vec!["Matched 'excavation' in description"]);
    }

    #[test]
    fn test_rules_are_additive() {
        // tag (+2), category (+1), description hits for both keywords (+2).
        let index = build_index(&["Excavation Contractors"]);
        let record = make_record(&[
            ("business_tags", "['Excavation']"),
            ("category", "contractors"),
            ("description", "excavation contractors"),
        ]);

        let scorer = EvidenceScorer::new(&DEFAULT_CLASSIFIER_CONFIG);
        let evidence = scorer.score(&index.entries()[0], &record);

        assert_eq!(evidence.score, 5);
    }

    #[test]
    fn test_malformed_tags_are_treated_as_no_tags() {
        let index = build_index(&["Excavation Contractors"]);
        let record = make_record(&[
            ("business_tags", "not a serialized list"),
            ("description", "excavation"),
        ]);

        let scorer = EvidenceScorer::new(&DEFAULT_CLASSIFIER_CONFIG);
        let evidence = scorer.score(&index.entries()[0], &record);

        assert_eq!(evidence.score, 1);
    }
}

#[cfg(test)]
mod classifier_tests {
    use super::*;

    #[test]
    fn test_empty_record_is_unclear() {
        let index = build_index(&["Commercial Roofing", "Landscaping Services"]);
        let record = make_record(&[]);

        let result = classify_company(&record, &index);

        assert!(result.is_unclear());
        assert!(result.labels.is_empty());
        assert_eq!(result.label_field(), UNCLEAR_LABEL);
        assert_eq!(result.reason_field(), NO_EVIDENCE_REASON);
        assert_eq!(result.confidence, ConfidenceLevel::Low);
        assert_eq!(result.confidence_field(), "low");
    }

    #[test]
    fn test_score_below_threshold_is_unclear() {
        // A lone business tag match scores 2, one short of the threshold.
        let index = build_index(&["Excavation Contractors"]);
        let record = make_record(&[("business_tags", "['Excavation']")]);

        let result = classify_company(&record, &index);

        assert!(result.is_unclear());
    }

    #[test]
    fn test_score_three_matches_with_low_confidence() {
        let index = build_index(&["Excavation Contractors"]);
        let record = make_record(&[
            ("business_tags", "['Excavation']"),
            ("category", "excavation"),
        ]);

        let result = classify_company(&record, &index);

        assert_eq!(result.labels, vec!["Excavation Contractors"]);
        assert_eq!(result.confidence, ConfidenceLevel::Low);
    }

    #[test]
    fn test_score_four_is_medium_confidence() {
        let index = build_index(&["Excavation Contractors"]);
        let record = make_record(&[("business_tags", "['Excavation', 'Contractors On Site']")]);

        let result = classify_company(&record, &index);

        assert_eq!(result.confidence, ConfidenceLevel::Medium);
    }

    #[test]
    fn test_score_five_is_medium_confidence() {
        let index = build_index(&["Excavation Contractors"]);
        let record = make_record(&[
            ("business_tags", "['Excavation']"),
            ("category", "contractors"),
            ("description", "excavation contractors"),
        ]);

        let result = classify_company(&record, &index);

        assert_eq!(result.confidence, ConfidenceLevel::Medium);
    }

    #[test]
    fn test_score_six_is_high_confidence() {
        let index = build_index(&["Excavation Contractors"]);
        let record = make_record(&[
            ("business_tags", "['Excavation', 'Contractors Crew']"),
            ("category", "excavation contractors"),
        ]);

        let result = classify_company(&record, &index);

        assert_eq!(result.confidence, ConfidenceLevel::High);
    }

    #[test]
    fn test_score_seven_is_high_confidence() {
        let index = build_index(&["Excavation Contractors"]);
        let record = make_record(&[
            ("business_tags", "['Excavation', 'Contractors Crew']"),
            ("category", "excavation contractors"),
            ("description", "excavation"),
        ]);

        let result = classify_company(&record, &index);

        assert_eq!(result.confidence, ConfidenceLevel::High);
    }

    #[test]
    fn test_label_cap_keeps_index_order() {
        // Four labels all reach the threshold; only the first three (in
        // taxonomy order) are reported, but reasons from the fourth survive.
        let index = build_index(&[
            "Alpha Consulting",
            "Bravo Consulting",
            "Charlie Consulting",
            "Delta Consulting",
        ]);
        let record = make_record(&[
            ("business_tags", "['alpha', 'bravo', 'charlie', 'delta']"),
            ("category", "alpha bravo charlie delta"),
        ]);

        let result = classify_company(&record, &index);

        assert_eq!(
            result.labels,
            vec!["Alpha Consulting", "Bravo Consulting", "Charlie Consulting"]
        );
        assert!(result
            .reasons
            .contains(&"Matched 'delta' in business tag".to_string()));
    }

    #[test]
    fn test_label_cap_is_not_score_ranked() {
        // Reference behavior: the cap truncates by discovery order even when
        // a later label scored higher. The dropped label still drives the
        // confidence tier.
        let index = build_index(&[
            "Alpha Machining",
            "Bravo Logistics",
            "Charlie Catering",
            "Delta Surveying",
        ]);
        let record = make_record(&[
            ("business_tags", "['alpha', 'bravo', 'charlie', 'delta']"),
            ("category", "alpha bravo charlie delta"),
            ("description", "delta surveying equipment"),
        ]);

        let result = classify_company(&record, &index);

        // Delta scored 5, everything else 3 — and Delta is the one dropped.
        assert_eq!(
            result.labels,
            vec!["Alpha Machining", "Bravo Logistics", "Charlie Catering"]
        );
        assert_eq!(result.confidence, ConfidenceLevel::Medium);
    }

    #[test]
    fn test_reasons_deduped_across_labels_preserving_order() {
        let index = build_index(&["Commercial Roofing", "Roofing Repair"]);
        let record = make_record(&[
            ("business_tags", "['Roofing']"),
            ("category", "roofing repair commercial"),
        ]);

        let result = classify_company(&record, &index);

        assert_eq!(
            result.reasons,
            vec![
                "Matched 'roofing' in business tag",
                "Matched 'commercial' in category/niche",
                "Matched 'roofing' in category/niche",
                "Matched 'repair' in category/niche",
            ]
        );
    }

    #[test]
    fn test_output_fields_join_with_semicolons() {
        let index = build_index(&["Commercial Roofing", "Roofing Repair"]);
        let record = make_record(&[
            ("business_tags", "['Roofing']"),
            ("category", "roofing repair commercial"),
        ]);

        let result = classify_company(&record, &index);

        assert_eq!(result.label_field(), "Commercial Roofing;Roofing Repair");
        assert!(result.reason_field().contains(';'));
    }

    #[test]
    fn test_custom_threshold_accepts_weaker_evidence() {
        let config = ClassifierConfig {
            min_evidence_score: 1,
            ..DEFAULT_CLASSIFIER_CONFIG
        };
        let index = build_index(&["Excavation Contractors"]);
        let record = make_record(&[("description", "excavation")]);

        let result = classify_company_with_custom_config(&record, &index, &config);

        assert_eq!(result.labels, vec!["Excavation Contractors"]);
        assert_eq!(result.confidence, ConfidenceLevel::Low);
    }
}

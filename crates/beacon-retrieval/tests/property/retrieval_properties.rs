use beacon_core::config::RankingConfig;
use beacon_core::models::TableDocument;
use beacon_retrieval::{append_unique, heuristic_score, merge_by_occurrence};
use proptest::prelude::*;

fn doc(dataset: &str, table: &str) -> TableDocument {
    TableDocument {
        id: None,
        dataset_name: dataset.to_string(),
        dataset_description: String::new(),
        table_name: Some(table.to_string()),
        table_description: None,
        other_parameters: vec![],
        embedding: None,
        metadata: None,
    }
}

fn table_names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Z][0-9]{1,4}", 0..20)
}

proptest! {
    #[test]
    fn append_unique_yields_distinct_identities(
        base in table_names(),
        supplement in table_names(),
    ) {
        // The base batch arrives deduplicated from search; model that here.
        let mut seen = std::collections::HashSet::new();
        let base: Vec<String> = base.into_iter().filter(|t| seen.insert(t.clone())).collect();

        let merged = append_unique(
            base.iter().map(|t| doc("NIPA", t)).collect(),
            supplement.iter().map(|t| doc("NIPA", t)).collect(),
        );

        prop_assert!(merged.len() >= base.len());
        prop_assert!(merged.len() <= base.len() + supplement.len());
        // Base keeps its order as a prefix.
        for (kept, original) in merged.iter().zip(base.iter()) {
            prop_assert_eq!(kept.table_name.as_deref(), Some(original.as_str()));
        }

        let mut identities: Vec<String> =
            merged.iter().map(TableDocument::identity).collect();
        identities.sort();
        identities.dedup();
        prop_assert_eq!(identities.len(), merged.len(), "duplicate identity survived the merge");
    }

    #[test]
    fn occurrence_merge_never_grows_past_distinct_inputs(
        first in table_names(),
        second in table_names(),
    ) {
        let merged = merge_by_occurrence(&[
            first.iter().map(|t| doc("NIPA", t)).collect(),
            second.iter().map(|t| doc("NIPA", t)).collect(),
        ]);

        let mut distinct: Vec<&String> = first.iter().chain(second.iter()).collect();
        distinct.sort();
        distinct.dedup();
        prop_assert_eq!(merged.len(), distinct.len());

        let mut identities: Vec<String> =
            merged.iter().map(TableDocument::identity).collect();
        identities.sort();
        identities.dedup();
        prop_assert_eq!(identities.len(), merged.len());
    }

    #[test]
    fn heuristic_score_stays_in_confidence_range(
        question in ".{0,120}",
        dataset in "[A-Za-z]{0,12}",
        description in ".{0,200}",
    ) {
        let mut document = doc(&dataset, "T1");
        document.dataset_description = description;
        let score = heuristic_score(&question, &document, &RankingConfig::default());
        prop_assert!((0..=100).contains(&score));
    }
}

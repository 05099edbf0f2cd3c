use tracing::{debug, info, warn};

use beacon_core::config::RetrievalConfig;
use beacon_core::extract;
use beacon_core::models::TableDocument;
use beacon_core::traits::{
    EmbeddingProvider, HybridSearch, ModelTier, SearchIndex, SearchRequest, TextGenerator,
};

use crate::merge::{append_unique, merge_by_occurrence};
use crate::prompts;

/// Issues hybrid searches with fallback/supplement strategies and merges
/// the results. A failed external call for one sub-strategy never aborts
/// the other; an empty merged result is a valid "no candidates" outcome.
pub struct CandidateRetriever<'a> {
    search: &'a dyn HybridSearch,
    embedder: &'a dyn EmbeddingProvider,
    generator: &'a dyn TextGenerator,
    config: &'a RetrievalConfig,
}

impl<'a> CandidateRetriever<'a> {
    pub fn new(
        search: &'a dyn HybridSearch,
        embedder: &'a dyn EmbeddingProvider,
        generator: &'a dyn TextGenerator,
        config: &'a RetrievalConfig,
    ) -> Self {
        Self {
            search,
            embedder,
            generator,
            config,
        }
    }

    /// Broad strategy: one fixed-size unfiltered batch, topped up from the
    /// anchor dataset when it falls below its floor. The original batch
    /// keeps its order; unique supplement entries are appended.
    pub fn broad(&self, question: &str) -> Vec<TableDocument> {
        let vector = self.embed_or_none(question);

        let base = self.search_or_empty(&SearchRequest {
            text_query: Some(question.to_string()),
            query_vector: vector.clone(),
            limit: self.config.broad_limit,
            ..SearchRequest::default()
        });

        let anchor_count = base
            .iter()
            .filter(|d| d.dataset_name == self.config.anchor_dataset)
            .count();
        debug!(
            results = base.len(),
            anchor = anchor_count,
            floor = self.config.anchor_floor,
            "broad search complete"
        );

        if anchor_count >= self.config.anchor_floor {
            return base;
        }

        let supplement = self.search_or_empty(&SearchRequest {
            text_query: Some(question.to_string()),
            query_vector: vector,
            dataset_filter: Some(self.config.anchor_dataset.clone()),
            limit: self.config.anchor_floor,
            ..SearchRequest::default()
        });

        let merged = append_unique(base, supplement);
        info!(results = merged.len(), "broad retrieval merged with anchor supplement");
        merged
    }

    /// Scoped strategy, used once a dataset has been chosen: the raw
    /// question against the primary index and an extracted core-item
    /// phrase against the short-description index, merged by occurrence.
    /// Classification hints narrow both searches when available; if both
    /// come back empty an unfiltered listing for the dataset is used.
    pub fn scoped(&self, question: &str, dataset: &str) -> Vec<TableDocument> {
        let (section, metric) = self.classify(question);

        let question_results = self.search_or_empty(&SearchRequest {
            text_query: Some(question.to_string()),
            query_vector: self.embed_or_none(question),
            dataset_filter: Some(dataset.to_string()),
            section_filter: section,
            metric_filter: metric,
            index: SearchIndex::Primary,
            limit: self.config.scoped_limit,
        });

        let core_results = match self.core_data_item(question) {
            Some(phrase) => self.search_or_empty(&SearchRequest {
                text_query: Some(phrase.clone()),
                query_vector: self.embed_or_none(&phrase),
                dataset_filter: Some(dataset.to_string()),
                section_filter: section,
                metric_filter: metric,
                index: SearchIndex::ShortDescription,
                limit: self.config.scoped_limit,
            }),
            None => Vec::new(),
        };

        if question_results.is_empty() && core_results.is_empty() {
            warn!(dataset, "both scoped searches empty, falling back to listing");
            return self.search_or_empty(&SearchRequest::listing(
                dataset,
                self.config.listing_fallback_limit,
            ));
        }

        let merged = merge_by_occurrence(&[question_results, core_results]);
        debug!(results = merged.len(), dataset, "scoped retrieval merged");
        merged
    }

    fn embed_or_none(&self, text: &str) -> Option<Vec<f32>> {
        match self.embedder.embed(text) {
            Ok(vector) => Some(vector),
            Err(e) => {
                warn!(error = %e, "embedding failed, searching text-only");
                None
            }
        }
    }

    fn search_or_empty(&self, request: &SearchRequest) -> Vec<TableDocument> {
        match self.search.search(request) {
            Ok(results) => results,
            Err(e) => {
                warn!(error = %e, "search call failed, continuing with empty results");
                Vec::new()
            }
        }
    }

    /// The short phrase used against the short-description index. `None`
    /// when extraction fails or produces nothing usable.
    fn core_data_item(&self, question: &str) -> Option<String> {
        match self
            .generator
            .generate(&prompts::core_data_item(question), ModelTier::Fast)
        {
            Ok(reply) => {
                let phrase = reply.trim().trim_matches('"').to_string();
                (!phrase.is_empty()).then_some(phrase)
            }
            Err(e) => {
                warn!(error = %e, "core data item extraction failed");
                None
            }
        }
    }

    /// Section/metric narrowing hints. Classification failure means no
    /// hint, never a hard requirement.
    fn classify(&self, question: &str) -> (Option<u32>, Option<u32>) {
        let reply = match self
            .generator
            .generate(&prompts::classification(question), ModelTier::Fast)
        {
            Ok(reply) => reply,
            Err(e) => {
                warn!(error = %e, "classification failed, proceeding unfiltered");
                return (None, None);
            }
        };

        let Some(snippet) = extract::first_json_object(&reply) else {
            return (None, None);
        };
        let Ok(value) = serde_json::from_str::<serde_json::Value>(snippet) else {
            return (None, None);
        };
        let field = |name: &str| value.get(name).and_then(|v| v.as_u64()).map(|n| n as u32);
        (field("section"), field("metric"))
    }
}

use crate::errors::SearchError;
use crate::models::TableDocument;

/// Which index a search runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchIndex {
    /// The full table-document index.
    #[default]
    Primary,
    /// The independently-embedded short-description index.
    ShortDescription,
}

/// One hybrid (lexical + vector) search.
#[derive(Debug, Clone, Default)]
pub struct SearchRequest {
    pub text_query: Option<String>,
    pub query_vector: Option<Vec<f32>>,
    /// Restrict results to one dataset.
    pub dataset_filter: Option<String>,
    /// Narrowing hints from question classification; a backend may ignore
    /// them, and the pipeline proceeds unfiltered when classification fails.
    pub section_filter: Option<u32>,
    pub metric_filter: Option<u32>,
    pub index: SearchIndex,
    pub limit: usize,
}

impl SearchRequest {
    /// An unfiltered listing of up to `limit` documents for one dataset.
    pub fn listing(dataset: &str, limit: usize) -> Self {
        Self {
            dataset_filter: Some(dataset.to_string()),
            limit,
            ..Self::default()
        }
    }
}

/// Hybrid lexical + vector search over the table-document corpus.
/// Results carry a stable per-document identity and arrive in relevance
/// order.
pub trait HybridSearch: Send + Sync {
    fn search(&self, request: &SearchRequest) -> Result<Vec<TableDocument>, SearchError>;
}

//! Ports onto external capabilities: catalog reads, hybrid search,
//! embedding, text generation, and the statistics fetch. All pipeline
//! logic stays on this side of the boundary; implementations own
//! transport, persistence, and API credentials.

mod catalog;
mod embedding;
mod fetch;
mod generation;
mod search;

pub use catalog::CatalogReader;
pub use embedding::EmbeddingProvider;
pub use fetch::StatisticsFetcher;
pub use generation::{ModelTier, TextGenerator};
pub use search::{HybridSearch, SearchIndex, SearchRequest};

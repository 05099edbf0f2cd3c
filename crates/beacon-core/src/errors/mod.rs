//! Error taxonomy.
//!
//! Each external capability has its own error enum; `BeaconError` unifies
//! them for pipeline-level signatures. Recovery rules are the component's
//! responsibility: malformed generator output degrades to heuristics or
//! defaults, capacity overflows escalate once then skip, and only catalog
//! inconsistencies and final-fetch failures surface to the caller.

mod catalog_error;
mod embedding_error;
mod fetch_error;
mod generation_error;
mod search_error;

pub use catalog_error::CatalogError;
pub use embedding_error::EmbeddingError;
pub use fetch_error::FetchError;
pub use generation_error::GenerationError;
pub use search_error::SearchError;

/// Unified error type for pipeline-level operations.
#[derive(Debug, thiserror::Error)]
pub enum BeaconError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error(transparent)]
    Embedding(#[from] EmbeddingError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

pub type BeaconResult<T> = Result<T, BeaconError>;

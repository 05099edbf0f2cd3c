//! Data model for the catalog, candidates, contexts, and query parameters.

mod candidate;
mod context;
mod dataset;
mod query_params;
mod table_document;

pub use candidate::CandidateResult;
pub use context::QueryContext;
pub use dataset::{Dataset, Parameter, ParameterValue};
pub use query_params::{QueryParams, DATASET_NAME_KEY};
pub use table_document::{ParameterSummary, StructuredMetadata, TableDocument};

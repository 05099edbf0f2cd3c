//! # beacon-core
//!
//! Foundation crate for the Beacon query agent.
//! Defines the catalog data model, the error taxonomy, configuration,
//! the external-capability ports, and shared output-parsing helpers.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod documents;
pub mod errors;
pub mod extract;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::BeaconConfig;
pub use errors::{BeaconError, BeaconResult};
pub use models::{
    CandidateResult, Dataset, Parameter, ParameterValue, QueryContext, QueryParams,
    StructuredMetadata, TableDocument,
};

//! Shared fixtures for Beacon tests: a small national-accounts style
//! catalog and scripted implementations of every external-capability port.

mod catalog;
mod stubs;

pub use catalog::{nipa_dataset, regional_dataset, table_doc, test_catalog, InMemoryCatalog};
pub use stubs::{ScriptedFetcher, ScriptedGenerator, ScriptedSearch, StubEmbedder};

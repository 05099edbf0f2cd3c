//! # beacon-agent
//!
//! The end-to-end question pipeline: dataset routing, candidate retrieval,
//! two-stage ranking, context construction, parameter assembly, the data
//! fetch with its single correction round, and grounded answer synthesis.
//!
//! The engine is a facade over borrowed capability ports; callers own the
//! concrete catalog, search, embedding, generation, and fetch
//! implementations.

mod engine;
mod prompts;
mod report;

pub use engine::AgentEngine;
pub use report::{AskReport, FetchStatus};

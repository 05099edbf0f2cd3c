//! # beacon-retrieval
//!
//! Candidate retrieval and two-stage relevance ranking.
//!
//! Retrieval offers a broad strategy (unfiltered batch with a guaranteed
//! anchor-dataset floor) and a scoped strategy (parallel question/core-item
//! searches within a chosen dataset, merged by occurrence). Ranking runs a
//! cheap triage pass over the full candidate set, then a fine-grained pass
//! with context payloads and tie detection over the survivors.

mod merge;
mod prompts;
mod retriever;
mod selection;
mod triage;

pub use merge::{append_unique, merge_by_occurrence};
pub use retriever::CandidateRetriever;
pub use selection::{FineRanker, Selection};
pub use triage::{heuristic_score, TriageOutcome, TriageRanker};

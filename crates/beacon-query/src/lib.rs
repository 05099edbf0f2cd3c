//! # beacon-query
//!
//! Turns a question plus a built query context into a flat statistics-API
//! parameter map, and runs the single bounded correction round after a
//! failed fetch. All prompt construction and output parsing lives here;
//! only the generation call itself is external.

mod assembler;
mod corrector;
mod prompts;

pub use assembler::QueryAssembler;
pub use corrector::QueryCorrector;

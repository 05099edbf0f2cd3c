//! # beacon-context
//!
//! Turns a chosen dataset (and optional table) into a minimal, bounded
//! parameter descriptor safe to hand to a downstream generator. The built
//! context is always a fresh, independent structure; the catalog snapshot
//! is never mutated.

mod builder;

pub use builder::ContextBuilder;

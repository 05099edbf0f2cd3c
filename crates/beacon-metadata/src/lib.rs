//! # beacon-metadata
//!
//! Parses hierarchical table-name strings (`"Table 1.2.3. Foo Bar (A) (Q)"`,
//! `"7.1A Selected Aggregates"`) into structured attributes, and clusters
//! sibling tables sharing a section.subsection prefix to derive a canonical
//! subsection label.
//!
//! A name matching neither numbering scheme yields `None`, never an error:
//! callers treat that as "no structured metadata available".

mod label;
mod parser;
mod taxonomy;

pub use label::longest_common_substring;
pub use parser::{enrich_documents, parse, strip_markers};
pub use taxonomy::section_label;

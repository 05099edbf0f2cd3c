use serde::{Deserialize, Serialize};

use super::defaults;

/// Candidate retrieval configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Size of the unfiltered batch fetched by the broad strategy.
    pub broad_limit: usize,
    /// Dataset guaranteed minimum representation in broad retrieval.
    pub anchor_dataset: String,
    /// Minimum anchor-dataset entries before a supplement fetch is issued.
    pub anchor_floor: usize,
    /// Per-search limit for the scoped strategy.
    pub scoped_limit: usize,
    /// Cap on the unfiltered listing used when both scoped searches
    /// come back empty.
    pub listing_fallback_limit: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            broad_limit: defaults::DEFAULT_BROAD_LIMIT,
            anchor_dataset: defaults::DEFAULT_ANCHOR_DATASET.to_string(),
            anchor_floor: defaults::DEFAULT_ANCHOR_FLOOR,
            scoped_limit: defaults::DEFAULT_SCOPED_LIMIT,
            listing_fallback_limit: defaults::DEFAULT_LISTING_FALLBACK_LIMIT,
        }
    }
}

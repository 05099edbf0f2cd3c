use serde::{Deserialize, Serialize};

use super::defaults;

/// Two-stage ranking configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Number of triage survivors handed to fine-grained ranking.
    pub triage_top_n: usize,
    /// Maximum score gap, in points, for a non-top candidate to be
    /// reported as a near-tie alternative.
    pub tie_threshold: u8,
    /// Terms granting a small fixed boost in the heuristic fallback.
    pub anchor_terms: Vec<String>,
    /// Dataset granting a small fixed boost in the heuristic fallback.
    pub anchor_dataset: String,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            triage_top_n: defaults::DEFAULT_TRIAGE_TOP_N,
            tie_threshold: defaults::DEFAULT_TIE_THRESHOLD,
            anchor_terms: defaults::DEFAULT_ANCHOR_TERMS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            anchor_dataset: defaults::DEFAULT_ANCHOR_DATASET.to_string(),
        }
    }
}

//! Configuration. Every numeric or business constant the pipeline relies on
//! (anchor dataset, batch sizes, tie threshold, elision bounds) lives here
//! rather than in component code, loadable from TOML with serde defaults.

pub mod defaults;

mod context_config;
mod ranking_config;
mod retrieval_config;

pub use context_config::ContextConfig;
pub use ranking_config::RankingConfig;
pub use retrieval_config::RetrievalConfig;

use serde::{Deserialize, Serialize};

/// Top-level configuration for the whole pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BeaconConfig {
    pub retrieval: RetrievalConfig,
    pub ranking: RankingConfig,
    pub context: ContextConfig,
}

impl BeaconConfig {
    /// Parse a TOML document; absent sections and fields fall back to
    /// defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

use crate::errors::GenerationError;

/// Capacity tier of the generation capability. The ranker escalates from
/// `Standard` to `Large` exactly once on a reported capacity overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelTier {
    /// Cheap, used for triage scoring and small extractions.
    Fast,
    /// Default for fine-grained scoring.
    Standard,
    /// Highest capacity; parameter assembly, correction, and the one-time
    /// escalation target.
    Large,
}

/// Text generation port. Prompt construction and output parsing stay in
/// the core; only the call itself is external.
pub trait TextGenerator: Send + Sync {
    fn generate(&self, prompt: &str, tier: ModelTier) -> Result<String, GenerationError>;
}

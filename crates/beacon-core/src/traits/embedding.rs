use crate::errors::EmbeddingError;

/// Embedding generation provider.
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a single text, returning a vector of floats.
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// The dimensionality of embeddings produced by this provider.
    /// Must match the index; a mismatched vector is a hard indexing-time
    /// error, never silently tolerated.
    fn dimensions(&self) -> usize;
}

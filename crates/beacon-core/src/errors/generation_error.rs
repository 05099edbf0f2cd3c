/// Text-generation capability errors.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// Context/token overflow reported by the model. Callers escalate once
    /// to a higher-capacity tier before skipping the item.
    #[error("generation capacity exceeded: {reason}")]
    CapacityExceeded { reason: String },

    /// Output arrived but could not be parsed into the expected shape.
    #[error("malformed generation output: {reason}")]
    Malformed { reason: String },

    #[error("generation provider failed: {reason}")]
    Provider { reason: String },
}

/// Hybrid-search backend errors.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("search backend failed: {reason}")]
    Backend { reason: String },

    #[error("search timed out after {millis}ms")]
    Timeout { millis: u64 },
}

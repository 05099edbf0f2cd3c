/// Statistics-fetch errors. A server-reported error payload is distinct
/// from a transport failure; only the former carries an API message the
/// corrector can feed back to the generator.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("API error: {message}")]
    Api { message: String },

    #[error("fetch transport failed: {reason}")]
    Transport { reason: String },
}

impl FetchError {
    /// The message handed to the correction round.
    pub fn correction_message(&self) -> String {
        self.to_string()
    }
}

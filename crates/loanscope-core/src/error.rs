use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoanscopeError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Invalid offer '{offer_id}': {reason}")]
    InvalidOffer { offer_id: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for LoanscopeError {
    fn from(e: serde_json::Error) -> Self {
        LoanscopeError::SerializationError(e.to_string())
    }
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InvestmentError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Invalid scenario: {0}")]
    InvalidScenario(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for InvestmentError {
    fn from(e: serde_json::Error) -> Self {
        InvestmentError::SerializationError(e.to_string())
    }
}

impl InvestmentError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        InvestmentError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

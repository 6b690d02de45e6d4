use thiserror::Error;

pub type Result<T> = std::result::Result<T, GiftGenieError>;

/// Message shown to the user for any failure on the recommendation path.
/// The underlying cause is logged, never surfaced.
pub const FETCH_FAILURE_MESSAGE: &str = "Failed to fetch recommendations. Please try again.";

#[derive(Error, Debug)]
pub enum GiftGenieError {
    /// The model call succeeded but carried no text payload.
    #[error("model returned an empty response")]
    EmptyResponse,

    /// The model returned text that does not parse as the requested schema.
    #[error("malformed model response: {reason}")]
    MalformedResponse { reason: String },

    /// The HTTP call to the model API failed (network, auth, non-2xx).
    #[error("Gemini API request failed: {0}")]
    ApiFailure(String),

    /// Favorites file could not be written or serialized.
    #[error("favorites storage error: {0}")]
    Storage(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl GiftGenieError {
    /// Collapse every recommendation-path failure into the single
    /// user-facing message. Storage and config errors are not shown to the
    /// user through this path.
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILURE_MESSAGE
    }
}

impl From<reqwest::Error> for GiftGenieError {
    fn from(err: reqwest::Error) -> Self {
        GiftGenieError::ApiFailure(err.to_string())
    }
}

impl From<std::io::Error> for GiftGenieError {
    fn from(err: std::io::Error) -> Self {
        GiftGenieError::Storage(err.to_string())
    }
}

use thiserror::Error;

pub const TRANSPORT_FAILURE_MESSAGE: &str = "Something went wrong!";
pub const NOT_FOUND_MESSAGE: &str = "Movie not found!";

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider returned HTTP status {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("no match: {0}")]
    NotFound(String),

    #[error("malformed payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ProviderError {
    /// Message shown to the user for this failure.
    ///
    /// Transport-level failures and payload-level failures are kept apart:
    /// a provider that answered with something we cannot use reads as
    /// "no match" rather than a broken connection.
    pub fn user_message(&self) -> &'static str {
        match self {
            ProviderError::Status(_) | ProviderError::Transport(_) => TRANSPORT_FAILURE_MESSAGE,
            ProviderError::NotFound(_) | ProviderError::Decode(_) => NOT_FOUND_MESSAGE,
        }
    }
}

pub type ProviderResult<T> = Result<T, ProviderError>;

use thiserror::Error;

/// Errors that can occur while fetching characters.
///
/// All of them are recoverable: the session shows them and offers a retry.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Transport-level failure talking to the provider
    #[error("Request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Provider answered with a non-success status
    #[error("Character API returned HTTP {status}")]
    Status { status: u16 },

    /// Response body was not a character page
    #[error("Failed to decode character list: {0}")]
    Decode(#[from] serde_json::Error),

    /// Request exceeded the configured timeout
    #[error("Request timeout after {duration}s")]
    Timeout { duration: u64 },

    /// Provider returned fewer characters than the board needs
    #[error("Expected {wanted} characters, provider returned {got}")]
    NotEnoughCharacters { wanted: usize, got: usize },
}

impl LoadError {
    /// Short message for the load-failed panel.
    pub fn user_message(&self) -> &'static str {
        match self {
            LoadError::Client(_) | LoadError::Request { .. } => "Could not reach the character API",
            LoadError::Status { .. } => "The character API refused the request",
            LoadError::Decode(_) => "The character API sent something unexpected",
            LoadError::Timeout { .. } => "The character API took too long to answer",
            LoadError::NotEnoughCharacters { .. } => "Not enough characters to build a board",
        }
    }
}

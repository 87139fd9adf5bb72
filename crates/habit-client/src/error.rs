//! Error types for backend calls

use thiserror::Error;

/// Everything that can go wrong talking to the habit backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, refused connection, CORS, ...)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The body was not the JSON shape we expected
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Short message suitable for an inline notice in a view.
    pub fn notice(&self) -> String {
        match self {
            ApiError::Network(_) => {
                "Couldn't reach the server. Check your connection and try again.".to_string()
            }
            ApiError::Status { status, .. } => {
                format!("The server responded with an error ({status}).")
            }
            ApiError::Decode(_) => "The server sent a response we couldn't read.".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

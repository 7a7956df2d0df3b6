//! Client error types.

use thiserror::Error;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur while running a classification.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The local image path does not exist and does not resolve as a
    /// reachable remote image URL. Raised before any network call.
    #[error("Image does not exist at {path}!")]
    MissingImage { path: String },

    /// The endpoint returned a non-200 status. The message is the response
    /// body text, verbatim.
    #[error("{body}")]
    Remote { body: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    pub fn missing_image(path: impl Into<String>) -> Self {
        Self::MissingImage { path: path.into() }
    }

    pub fn remote(body: impl Into<String>) -> Self {
        Self::Remote { body: body.into() }
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

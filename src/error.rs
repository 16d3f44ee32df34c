use thiserror::Error;

/// Errors that can occur while talking to the recipe service
#[derive(Error, Debug)]
pub enum GuideError {
    /// Request could not be sent or its response could not be read
    #[error("Failed to reach recipe service: {0}")]
    FetchError(#[from] reqwest::Error),

    /// Service answered with a non-success status and an undecodable body
    #[error("Recipe service returned {status}: {body}")]
    ApiError { status: u16, body: String },

    /// Service answered with a success status but a body that does not match the contract
    #[error("Undecodable response from recipe service ({status}): {source}")]
    DecodeError {
        status: u16,
        #[source]
        source: serde_json::Error,
        body: String,
    },

    /// Client builder was given an unusable setting
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Terminal input/output failed
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

use thiserror::Error;

/// Custom error types for vibes
#[derive(Debug, Error)]
pub enum VibesError {
    #[error("Invalid server URL '{url}': {reason}")]
    InvalidServerUrl { url: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

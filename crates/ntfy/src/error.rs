use thiserror::Error;

/// ntfy endpoint errors
#[derive(Debug, Error)]
pub enum NtfyError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The ntfy instance rejected the publication
    #[error("ntfy API error: {0}")]
    Api(String),
}

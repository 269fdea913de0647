use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to parse feed: {0}")]
    Parse(String),
}

/// Raised when a feed item lacks a field the service mapping requires.
#[derive(Debug, Error, PartialEq)]
pub enum ExtractError {
    #[error("missing '{0}' field in feed item")]
    MissingField(String),
}

mod client;
mod error;
mod extract;
pub mod models;
mod parser;

pub use client::{build_url, FeedClient};
pub use error::{ExtractError, FeedError};
pub use extract::extract;
pub use models::{Article, FieldOverrides, RawItem};

pub type Result<T> = std::result::Result<T, FeedError>;

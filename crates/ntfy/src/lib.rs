//! ntfy push endpoint client library.
//!
//! This crate provides a simple client for publishing notifications to a
//! ntfy instance.
//!
//! # Example
//!
//! ```rust,ignore
//! use ntfy::{NtfyClient, Publication};
//!
//! let client = NtfyClient::new(reqwest::Client::new(), "https://ntfy.sh");
//! client.publish(&Publication::new("my-topic", "Hello, World!")).await?;
//! ```

mod client;
mod error;
mod models;

pub use client::NtfyClient;
pub use error::NtfyError;
pub use models::{Action, Publication};

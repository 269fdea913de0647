mod error;
mod file;

pub use error::HistoryError;
pub use file::FileHistory;

use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, HistoryError>;

/// Durable per-service set of already-notified article links.
///
/// Implementations must survive process restarts: a link recorded in one run
/// is still present in the next. The orchestrator serializes `exists` and
/// `record` per service, so implementations only need read-your-writes
/// ordering, not internal locking against concurrent cycles.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Create the record for `service` if it does not exist yet.
    async fn ensure(&self, service: &str) -> Result<()>;

    /// True iff `link` was previously recorded for `service`.
    async fn exists(&self, service: &str, link: &str) -> Result<bool>;

    /// Durably append `link` to the record for `service`.
    ///
    /// Creates the record if missing. Recording a link twice is harmless.
    async fn record(&self, service: &str, link: &str) -> Result<()>;
}

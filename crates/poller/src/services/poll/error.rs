use feed::{ExtractError, FeedError};
use history::HistoryError;
use ntfy::NtfyError;
use thiserror::Error;

/// Anything that can abort one account's processing for a cycle.
///
/// The orchestrator treats every variant alike (report the failure, move to
/// the next account); the variants exist so failure causes stay
/// distinguishable.
#[derive(Debug, Error)]
pub enum AccountError {
    #[error(transparent)]
    Fetch(#[from] FeedError),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Store(#[from] HistoryError),

    #[error(transparent)]
    Notify(#[from] NtfyError),
}

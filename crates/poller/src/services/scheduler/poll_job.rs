use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use super::traits::{JobResult, SchedulerJob};
use crate::config::ServiceDescriptor;
use crate::services::PollService;

/// Periodic feed poll.
///
/// Runs one poll cycle over every configured service per interval and logs
/// the cycle's outcome counters.
pub struct PollJob {
    services: Arc<Vec<ServiceDescriptor>>,
    poll: Arc<PollService>,
    interval: Duration,
}

impl PollJob {
    pub fn new(
        services: Arc<Vec<ServiceDescriptor>>,
        poll: Arc<PollService>,
        interval: Duration,
    ) -> Self {
        Self {
            services,
            poll,
            interval,
        }
    }
}

#[async_trait]
impl SchedulerJob for PollJob {
    fn name(&self) -> &'static str {
        "FeedPoll"
    }

    fn interval(&self) -> Duration {
        self.interval
    }

    async fn execute(&self) -> JobResult {
        tracing::info!("Starting feed poll");

        if self.services.is_empty() {
            tracing::debug!("No services configured");
            return Ok(());
        }

        let stats = self.poll.poll_all(&self.services).await;

        tracing::info!(
            "Feed poll completed: {} accounts polled, {} failed, {} notifications sent",
            stats.accounts_polled,
            stats.accounts_failed,
            stats.notified
        );

        Ok(())
    }
}

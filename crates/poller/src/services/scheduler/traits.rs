use std::time::Duration;

use async_trait::async_trait;

/// Result of one job execution.
pub type JobResult = anyhow::Result<()>;

/// A named periodic background job.
#[async_trait]
pub trait SchedulerJob: Send + Sync {
    /// Job name for logging.
    fn name(&self) -> &'static str;

    /// Time between executions.
    fn interval(&self) -> Duration;

    /// Run one execution.
    async fn execute(&self) -> JobResult;
}

mod poll_job;
mod traits;

pub use poll_job::PollJob;
pub use traits::{JobResult, SchedulerJob};

use std::sync::Arc;

/// Scheduler service that manages periodic background tasks.
///
/// The scheduler runs registered jobs at their specified intervals. Each job
/// runs independently in its own tokio task.
///
/// # Example
///
/// ```rust,ignore
/// let scheduler = SchedulerService::new()
///     .with_job(PollJob::new(services, poll, interval));
///
/// scheduler.start();
/// ```
pub struct SchedulerService {
    jobs: Vec<Arc<dyn SchedulerJob>>,
}

impl SchedulerService {
    /// Creates a new scheduler service with no jobs.
    pub fn new() -> Self {
        Self { jobs: Vec::new() }
    }

    /// Adds a job to the scheduler.
    ///
    /// Jobs are not started until [`start`](Self::start) is called.
    pub fn with_job<J: SchedulerJob + 'static>(mut self, job: J) -> Self {
        self.jobs.push(Arc::new(job));
        self
    }

    /// Starts all registered jobs.
    ///
    /// Each job runs in its own tokio task and executes at its specified
    /// interval, the first time right away. This method returns immediately
    /// after spawning all tasks.
    pub fn start(&self) {
        for job in &self.jobs {
            let job = Arc::clone(job);
            tokio::spawn(async move {
                Self::run_job_loop(job).await;
            });
        }
    }

    /// Runs a single job in an infinite loop.
    async fn run_job_loop(job: Arc<dyn SchedulerJob>) {
        let name = job.name();
        let interval = job.interval();

        let mut timer = tokio::time::interval(interval);
        timer.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        loop {
            timer.tick().await;

            match job.execute().await {
                Ok(()) => {
                    tracing::debug!("Job '{}' completed successfully", name);
                }
                Err(e) => {
                    tracing::error!("Job '{}' failed: {}", name, e);
                }
            }
        }
    }

    /// Returns the number of registered jobs.
    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }
}

impl Default for SchedulerService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;

    struct NoopJob;

    #[async_trait]
    impl SchedulerJob for NoopJob {
        fn name(&self) -> &'static str {
            "Noop"
        }

        fn interval(&self) -> Duration {
            Duration::from_secs(3600)
        }

        async fn execute(&self) -> JobResult {
            Ok(())
        }
    }

    #[test]
    fn with_job_registers_jobs() {
        let scheduler = SchedulerService::new().with_job(NoopJob).with_job(NoopJob);
        assert_eq!(scheduler.job_count(), 2);
    }
}

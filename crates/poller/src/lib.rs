pub mod config;
pub mod repositories;
pub mod services;

pub use config::{Config, ConfigError, ServiceDescriptor};
pub use repositories::{FileFollowList, FollowListError, FollowSource};
pub use services::{
    AccountError, CycleStats, FeedFetch, Notifier, NtfyNotifier, PollJob, PollService,
    SchedulerJob, SchedulerService,
};

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use feed::FeedClient;
use history::FileHistory;
use ntfy::NtfyClient;

/// Outbound requests shouldn't hang a cycle forever
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Wire everything up and run.
///
/// With `once` set, runs a single poll cycle and returns (cron-style
/// invocation); otherwise polls every `poll_interval` until the process is
/// interrupted.
pub async fn run(
    config: Config,
    data_path: &Path,
    poll_interval: Duration,
    once: bool,
) -> anyhow::Result<()> {
    std::fs::create_dir_all(data_path)?;

    let http = reqwest::Client::builder().timeout(HTTP_TIMEOUT).build()?;

    let follow = Arc::new(FileFollowList::new(data_path));
    // Touch follow lists so a fresh deployment polls empty lists instead of
    // erroring; growing them is the operator's job
    for service in &config.services {
        follow.ensure(&service.name).await?;
    }

    let fetcher = Arc::new(FeedClient::with_client(http.clone()));
    let history = Arc::new(FileHistory::new(data_path));
    let notifier = Arc::new(NtfyNotifier::new(NtfyClient::new(
        http,
        config.ntfy_base_url.clone(),
    )));

    let poll = Arc::new(PollService::new(fetcher, history, notifier, follow));
    let services = Arc::new(config.services);

    if once {
        let stats = poll.poll_all(&services).await;
        tracing::info!(
            "Poll completed: {} accounts polled, {} failed, {} notifications sent",
            stats.accounts_polled,
            stats.accounts_failed,
            stats.notified
        );
        return Ok(());
    }

    let scheduler =
        SchedulerService::new().with_job(PollJob::new(services.clone(), poll, poll_interval));
    scheduler.start();
    tracing::info!(
        "Polling {} services every {}s",
        services.len(),
        poll_interval.as_secs()
    );

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down");
    Ok(())
}

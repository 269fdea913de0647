use std::sync::Arc;

use feed::extract;
use history::HistoryStore;

use crate::config::ServiceDescriptor;
use crate::repositories::FollowSource;
use crate::services::Notifier;

use super::error::AccountError;
use super::traits::FeedFetch;

/// Outcome counters for one poll cycle.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct CycleStats {
    pub accounts_polled: usize,
    pub accounts_failed: usize,
    pub notified: usize,
}

/// Service for polling feeds and announcing unseen articles.
///
/// One cycle walks every configured service and every followed account in
/// order, running fetch → extract → novelty check → notify → record per
/// item. An account's failure is reported on the service's channel and never
/// touches other accounts or services. Articles are recorded only after
/// their announcement went out, so a failed announcement is naturally
/// retried next cycle.
pub struct PollService {
    fetcher: Arc<dyn FeedFetch>,
    history: Arc<dyn HistoryStore>,
    notifier: Arc<dyn Notifier>,
    follow: Arc<dyn FollowSource>,
}

impl PollService {
    pub fn new(
        fetcher: Arc<dyn FeedFetch>,
        history: Arc<dyn HistoryStore>,
        notifier: Arc<dyn Notifier>,
        follow: Arc<dyn FollowSource>,
    ) -> Self {
        Self {
            fetcher,
            history,
            notifier,
            follow,
        }
    }

    /// Run one poll cycle over every configured service.
    pub async fn poll_all(&self, services: &[ServiceDescriptor]) -> CycleStats {
        let mut stats = CycleStats::default();
        for service in services {
            self.poll_service(service, &mut stats).await;
        }
        stats
    }

    /// Poll every followed account of one service.
    async fn poll_service(&self, service: &ServiceDescriptor, stats: &mut CycleStats) {
        tracing::debug!("[{}] Polling service", service.name);

        let accounts = match self.follow.accounts(&service.name).await {
            Ok(accounts) => accounts,
            Err(e) => {
                tracing::error!("[{}] Failed to read follow list: {}", service.name, e);
                return;
            }
        };

        if let Err(e) = self.history.ensure(&service.name).await {
            tracing::error!("[{}] Failed to initialize history: {}", service.name, e);
            return;
        }

        if accounts.is_empty() {
            tracing::debug!("[{}] No followed accounts", service.name);
            return;
        }

        for account in &accounts {
            stats.accounts_polled += 1;

            if let Err(cause) = self.poll_account(service, account, stats).await {
                stats.accounts_failed += 1;
                tracing::warn!("[{}] Account '{}' failed: {}", service.name, account, cause);

                let message = format!("Error with scraping {}, '{}'.", account, cause);
                if let Err(e) = self.notifier.notify_error(&service.name, &message).await {
                    // No further fallback channel; absorb it
                    tracing::error!("[{}] Error notification failed: {}", service.name, e);
                }
            }
        }
    }

    /// Process a single account. The first error aborts the rest of the
    /// account's items for this cycle.
    async fn poll_account(
        &self,
        service: &ServiceDescriptor,
        account: &str,
        stats: &mut CycleStats,
    ) -> Result<(), AccountError> {
        let items = self
            .fetcher
            .fetch(&service.url_template, account, service.fields.item_tag())
            .await?;

        for item in &items {
            let article = extract(item, &service.fields, account)?;

            if self.history.exists(&service.name, &article.link).await? {
                tracing::debug!("[{}] Skipping known article {}", service.name, article.link);
                continue;
            }

            self.notifier
                .notify_article(&service.name, &service.descriptor, &article)
                .await?;
            self.history.record(&service.name, &article.link).await?;
            stats.notified += 1;

            tracing::debug!("[{}] Announced {}", service.name, article.link);
        }

        Ok(())
    }
}

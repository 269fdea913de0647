//! Mock collaborators for testing [`PollService`](super::PollService).
//!
//! Each mock records the calls it receives behind a `Mutex` so tests can
//! assert on ordering and counts after a cycle.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use feed::{Article, FeedError, RawItem};
use history::{HistoryError, HistoryStore};
use ntfy::NtfyError;

use crate::repositories::{FollowListError, FollowSource};
use crate::services::Notifier;

use super::FeedFetch;

/// Follow lists kept in memory.
#[derive(Default)]
pub struct MockFollow {
    lists: HashMap<String, Vec<String>>,
    failing: HashSet<String>,
}

impl MockFollow {
    pub fn with_list(mut self, service: &str, accounts: &[&str]) -> Self {
        self.lists.insert(
            service.to_string(),
            accounts.iter().map(|a| a.to_string()).collect(),
        );
        self
    }

    /// Make `accounts` fail for one service.
    pub fn with_failure(mut self, service: &str) -> Self {
        self.failing.insert(service.to_string());
        self
    }
}

#[async_trait]
impl FollowSource for MockFollow {
    async fn accounts(&self, service: &str) -> Result<Vec<String>, FollowListError> {
        if self.failing.contains(service) {
            return Err(FollowListError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no follow list",
            )));
        }
        Ok(self.lists.get(service).cloned().unwrap_or_default())
    }
}

/// Canned feed responses keyed by account.
#[derive(Default)]
pub struct MockFetcher {
    feeds: HashMap<String, Vec<RawItem>>,
    failing: HashSet<String>,
    fetched: Mutex<Vec<String>>,
}

impl MockFetcher {
    pub fn with_feed(mut self, account: &str, items: Vec<RawItem>) -> Self {
        self.feeds.insert(account.to_string(), items);
        self
    }

    /// Make fetches for `account` fail.
    pub fn with_failure(mut self, account: &str) -> Self {
        self.failing.insert(account.to_string());
        self
    }

    /// Accounts fetched so far, in call order.
    pub fn fetched(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }
}

#[async_trait]
impl FeedFetch for MockFetcher {
    async fn fetch(
        &self,
        _url_template: &str,
        account: &str,
        _item_tag: &str,
    ) -> Result<Vec<RawItem>, FeedError> {
        self.fetched.lock().unwrap().push(account.to_string());

        if self.failing.contains(account) {
            return Err(FeedError::Parse(format!(
                "HTTP 404 Not Found when fetching feed for {}",
                account
            )));
        }
        Ok(self.feeds.get(account).cloned().unwrap_or_default())
    }
}

/// History kept in memory, per service, in record order.
#[derive(Default)]
pub struct MemoryHistory {
    records: Mutex<HashMap<String, Vec<String>>>,
    failing: bool,
}

impl MemoryHistory {
    /// A store whose every operation fails.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }

    /// Links recorded for `service`, in record order.
    pub fn links(&self, service: &str) -> Vec<String> {
        self.records
            .lock()
            .unwrap()
            .get(service)
            .cloned()
            .unwrap_or_default()
    }

    /// Whether the record for `service` has been created.
    pub fn has_record(&self, service: &str) -> bool {
        self.records.lock().unwrap().contains_key(service)
    }

    fn check(&self) -> Result<(), HistoryError> {
        if self.failing {
            return Err(HistoryError::Io(std::io::Error::other("disk unavailable")));
        }
        Ok(())
    }
}

#[async_trait]
impl HistoryStore for MemoryHistory {
    async fn ensure(&self, service: &str) -> Result<(), HistoryError> {
        self.check()?;
        self.records
            .lock()
            .unwrap()
            .entry(service.to_string())
            .or_default();
        Ok(())
    }

    async fn exists(&self, service: &str, link: &str) -> Result<bool, HistoryError> {
        self.check()?;
        Ok(self
            .records
            .lock()
            .unwrap()
            .get(service)
            .is_some_and(|links| links.iter().any(|l| l == link)))
    }

    async fn record(&self, service: &str, link: &str) -> Result<(), HistoryError> {
        self.check()?;
        self.records
            .lock()
            .unwrap()
            .entry(service.to_string())
            .or_default()
            .push(link.to_string());
        Ok(())
    }
}

/// One recorded article announcement.
#[derive(Debug, Clone, PartialEq)]
pub struct SentArticle {
    pub channel: String,
    pub label: String,
    pub article: Article,
}

/// Records every notification; optionally rejects sends.
#[derive(Default)]
pub struct MockNotifier {
    articles: Mutex<Vec<SentArticle>>,
    errors: Mutex<Vec<(String, String)>>,
    reject_articles: bool,
    reject_errors: bool,
}

impl MockNotifier {
    /// A notifier whose article sends are rejected by the endpoint.
    pub fn rejecting_articles() -> Self {
        Self {
            reject_articles: true,
            ..Default::default()
        }
    }

    /// A notifier that rejects everything, error reports included.
    pub fn rejecting_everything() -> Self {
        Self {
            reject_articles: true,
            reject_errors: true,
            ..Default::default()
        }
    }

    pub fn articles(&self) -> Vec<SentArticle> {
        self.articles.lock().unwrap().clone()
    }

    /// Error reports as (channel, message) pairs, in send order.
    pub fn errors(&self) -> Vec<(String, String)> {
        self.errors.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn notify_article(
        &self,
        channel: &str,
        label: &str,
        article: &Article,
    ) -> Result<(), NtfyError> {
        if self.reject_articles {
            return Err(NtfyError::Api("rejected".to_string()));
        }
        self.articles.lock().unwrap().push(SentArticle {
            channel: channel.to_string(),
            label: label.to_string(),
            article: article.clone(),
        });
        Ok(())
    }

    async fn notify_error(&self, channel: &str, message: &str) -> Result<(), NtfyError> {
        if self.reject_errors {
            return Err(NtfyError::Api("rejected".to_string()));
        }
        self.errors
            .lock()
            .unwrap()
            .push((channel.to_string(), message.to_string()));
        Ok(())
    }
}

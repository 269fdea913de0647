use async_trait::async_trait;
use feed::{FeedClient, FeedError, RawItem};

/// Feed retrieval as the orchestrator sees it.
#[async_trait]
pub trait FeedFetch: Send + Sync {
    /// Fetch and parse one account's feed.
    async fn fetch(
        &self,
        url_template: &str,
        account: &str,
        item_tag: &str,
    ) -> Result<Vec<RawItem>, FeedError>;
}

#[async_trait]
impl FeedFetch for FeedClient {
    async fn fetch(
        &self,
        url_template: &str,
        account: &str,
        item_tag: &str,
    ) -> Result<Vec<RawItem>, FeedError> {
        FeedClient::fetch(self, url_template, account, item_tag).await
    }
}

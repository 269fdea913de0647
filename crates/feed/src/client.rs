use std::sync::LazyLock;

use regex::Regex;
use reqwest::Client;

use crate::error::FeedError;
use crate::models::RawItem;
use crate::parser::parse_items;

/// Handlebar-style placeholder in a URL template, e.g. `{{ user }}`
static PLACEHOLDER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{[^}]*\}\}").unwrap());

/// Build the concrete feed URL for an account.
///
/// Every `{{ ... }}` placeholder in the template is replaced with the account
/// id; the token text between the braces is ignored.
pub fn build_url(template: &str, account: &str) -> String {
    PLACEHOLDER_PATTERN
        .replace_all(template, account)
        .into_owned()
}

/// Feed fetcher client
pub struct FeedClient {
    client: Client,
}

impl FeedClient {
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    /// Create a new FeedClient with a custom reqwest Client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Fetch and parse one account's feed.
    ///
    /// Substitutes `account` into the URL template, performs a single GET and
    /// returns the elements matching `item_tag` in feed order. A non-success
    /// status is a [`FeedError`] like any transport failure.
    pub async fn fetch(
        &self,
        url_template: &str,
        account: &str,
        item_tag: &str,
    ) -> crate::Result<Vec<RawItem>> {
        let url = build_url(url_template, account);
        tracing::debug!("Fetching feed from: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(FeedError::Parse(format!(
                "HTTP {} when fetching {}",
                status, url
            )));
        }

        let bytes = response.bytes().await?;
        let items = parse_items(&bytes, item_tag)?;

        tracing::debug!("Parsed {} items from feed at {}", items.len(), url);
        Ok(items)
    }
}

impl Default for FeedClient {
    fn default() -> Self {
        Self::new()
    }
}

use async_trait::async_trait;
use feed::Article;
use ntfy::{Action, NtfyClient, NtfyError, Publication};

/// Outbound notification channel for the poll pipeline.
///
/// One outbound request per call, no batching, no retry; a failed send is
/// the caller's problem to report or absorb.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Announce a new article on `channel`. `label` is the service's
    /// human-readable category label ("Tweet", "YouTube video").
    async fn notify_article(
        &self,
        channel: &str,
        label: &str,
        article: &Article,
    ) -> Result<(), NtfyError>;

    /// Report a per-account failure on `channel`.
    async fn notify_error(&self, channel: &str, message: &str) -> Result<(), NtfyError>;
}

/// Announcement text for an article.
fn compose_message(label: &str, article: &Article) -> String {
    if article.title.is_empty() {
        format!("{} from {}!", label, article.display_name)
    } else {
        format!("{} from {}:\n\n{}!", label, article.display_name, article.title)
    }
}

/// ntfy-backed notifier implementation
pub struct NtfyNotifier {
    client: NtfyClient,
}

impl NtfyNotifier {
    pub fn new(client: NtfyClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Notifier for NtfyNotifier {
    async fn notify_article(
        &self,
        channel: &str,
        label: &str,
        article: &Article,
    ) -> Result<(), NtfyError> {
        let publication = Publication::new(channel, compose_message(label, article))
            .with_action(Action::view("View!", article.link.clone()));

        self.client.publish(&publication).await
    }

    async fn notify_error(&self, channel: &str, message: &str) -> Result<(), NtfyError> {
        self.client.send_plain(channel, message).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str) -> Article {
        Article {
            title: title.to_string(),
            link: "https://example.com/1".to_string(),
            published: "today".to_string(),
            display_name: "carol".to_string(),
        }
    }

    #[test]
    fn message_carries_label_name_and_title() {
        assert_eq!(
            compose_message("Tweet", &article("hello world")),
            "Tweet from carol:\n\nhello world!"
        );
    }

    #[test]
    fn empty_title_gets_the_short_form() {
        assert_eq!(compose_message("Tweet", &article("")), "Tweet from carol!");
    }
}

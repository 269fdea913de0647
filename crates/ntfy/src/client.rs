use reqwest::Client;

use crate::models::Publication;
use crate::NtfyError;

/// ntfy push endpoint client
pub struct NtfyClient {
    client: Client,
    base_url: String,
}

impl NtfyClient {
    /// Create a new ntfy client against an instance base URL
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Publish a structured notification to the instance root
    pub async fn publish(&self, publication: &Publication) -> Result<(), NtfyError> {
        tracing::debug!(
            "Publishing to topic '{}' via {}",
            publication.topic,
            self.base_url
        );

        let resp = self
            .client
            .post(&self.base_url)
            .json(publication)
            .send()
            .await?;

        if !resp.status().is_success() {
            let error_text = resp.text().await.unwrap_or_default();
            return Err(NtfyError::Api(error_text));
        }

        Ok(())
    }

    /// Send a plain-text message straight to a topic
    pub async fn send_plain(&self, topic: &str, text: &str) -> Result<(), NtfyError> {
        let url = format!("{}/{}", self.base_url, topic);

        let resp = self
            .client
            .post(&url)
            .body(text.to_string())
            .send()
            .await?;

        if !resp.status().is_success() {
            let error_text = resp.text().await.unwrap_or_default();
            return Err(NtfyError::Api(error_text));
        }

        Ok(())
    }
}

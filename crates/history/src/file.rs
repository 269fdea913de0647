use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use crate::{HistoryStore, Result};

/// Append-only file-backed history store.
///
/// Each service's record is a plain text file `<data>/<service>_hist` with
/// one link per line. Membership is an exact line match: a link being a
/// substring of a recorded one does not count. Fine for short follow lists;
/// anything bigger should sit behind [`HistoryStore`] with an indexed store.
pub struct FileHistory {
    data_path: PathBuf,
}

impl FileHistory {
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
        }
    }

    fn record_path(&self, service: &str) -> PathBuf {
        self.data_path.join(format!("{}_hist", service))
    }

    async fn touch(path: &Path) -> Result<()> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl HistoryStore for FileHistory {
    async fn ensure(&self, service: &str) -> Result<()> {
        Self::touch(&self.record_path(service)).await
    }

    async fn exists(&self, service: &str, link: &str) -> Result<bool> {
        let content = match tokio::fs::read_to_string(self.record_path(service)).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(e.into()),
        };

        Ok(content.lines().any(|line| line == link))
    }

    async fn record(&self, service: &str, link: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.record_path(service))
            .await?;

        // One write per link keeps the append atomic enough for a single
        // orchestrator process
        file.write_all(format!("{}\n", link).as_bytes()).await?;
        file.flush().await?;

        tracing::debug!("Recorded {} for service '{}'", link, service);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn record_then_exists() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileHistory::new(dir.path());

        store.record("nitter", "https://x/1").await.unwrap();

        assert!(store.exists("nitter", "https://x/1").await.unwrap());
        assert!(!store.exists("nitter", "https://x/2").await.unwrap());
    }

    #[tokio::test]
    async fn survives_a_restart() {
        let dir = tempfile::tempdir().unwrap();

        let store = FileHistory::new(dir.path());
        store.record("nitter", "https://x/1").await.unwrap();
        drop(store);

        let reopened = FileHistory::new(dir.path());
        assert!(reopened.exists("nitter", "https://x/1").await.unwrap());
    }

    #[tokio::test]
    async fn missing_record_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileHistory::new(dir.path());

        assert!(!store.exists("nitter", "https://x/1").await.unwrap());
    }

    #[tokio::test]
    async fn ensure_creates_an_empty_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileHistory::new(dir.path());

        store.ensure("nitter").await.unwrap();

        let path = dir.path().join("nitter_hist");
        assert_eq!(std::fs::read_to_string(path).unwrap(), "");
    }

    #[tokio::test]
    async fn ensure_leaves_existing_entries_alone() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileHistory::new(dir.path());

        store.record("nitter", "https://x/1").await.unwrap();
        store.ensure("nitter").await.unwrap();

        assert!(store.exists("nitter", "https://x/1").await.unwrap());
    }

    #[tokio::test]
    async fn membership_is_an_exact_line_match() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileHistory::new(dir.path());

        store.record("nitter", "https://x/12").await.unwrap();

        // A prefix of a recorded link is not itself recorded
        assert!(!store.exists("nitter", "https://x/1").await.unwrap());
    }

    #[tokio::test]
    async fn services_do_not_share_records() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileHistory::new(dir.path());

        store.record("nitter", "https://x/1").await.unwrap();

        assert!(!store.exists("proxitok", "https://x/1").await.unwrap());
    }
}

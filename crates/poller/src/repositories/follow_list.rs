use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;
use tokio::fs::OpenOptions;

#[derive(Debug, Error)]
pub enum FollowListError {
    #[error("follow list I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Source of the followed-account list for a service.
#[async_trait]
pub trait FollowSource: Send + Sync {
    /// Accounts to poll for `service`, in list order.
    async fn accounts(&self, service: &str) -> Result<Vec<String>, FollowListError>;
}

/// Follow lists kept as `<data>/<service>-follow-list.txt`, one account per
/// line. The list must exist before polling; use [`ensure`](Self::ensure) at
/// startup so a fresh deployment polls an empty list instead of erroring.
pub struct FileFollowList {
    data_path: PathBuf,
}

impl FileFollowList {
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
        }
    }

    fn list_path(&self, service: &str) -> PathBuf {
        self.data_path.join(format!("{}-follow-list.txt", service))
    }

    /// Create the follow list for `service` if it does not exist yet.
    pub async fn ensure(&self, service: &str) -> Result<(), FollowListError> {
        touch(&self.list_path(service)).await
    }
}

async fn touch(path: &Path) -> Result<(), FollowListError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await?;
    Ok(())
}

#[async_trait]
impl FollowSource for FileFollowList {
    async fn accounts(&self, service: &str) -> Result<Vec<String>, FollowListError> {
        let content = tokio::fs::read_to_string(self.list_path(service)).await?;

        Ok(content
            .lines()
            .map(|line| line.trim_end().to_string())
            .filter(|line| !line.is_empty())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reads_accounts_in_list_order() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("nitter-follow-list.txt"),
            "alice\nbob\ncarol\n",
        )
        .unwrap();

        let follow = FileFollowList::new(dir.path());
        let accounts = follow.accounts("nitter").await.unwrap();
        assert_eq!(accounts, ["alice", "bob", "carol"]);
    }

    #[tokio::test]
    async fn strips_trailing_whitespace_and_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("nitter-follow-list.txt"),
            "alice  \n\nbob\r\n",
        )
        .unwrap();

        let follow = FileFollowList::new(dir.path());
        let accounts = follow.accounts("nitter").await.unwrap();
        assert_eq!(accounts, ["alice", "bob"]);
    }

    #[tokio::test]
    async fn missing_list_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let follow = FileFollowList::new(dir.path());
        assert!(follow.accounts("nitter").await.is_err());
    }

    #[tokio::test]
    async fn ensure_creates_an_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let follow = FileFollowList::new(dir.path());

        follow.ensure("nitter").await.unwrap();

        let accounts = follow.accounts("nitter").await.unwrap();
        assert!(accounts.is_empty());
    }

    #[tokio::test]
    async fn ensure_leaves_an_existing_list_alone() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("nitter-follow-list.txt"), "alice\n").unwrap();

        let follow = FileFollowList::new(dir.path());
        follow.ensure("nitter").await.unwrap();

        let accounts = follow.accounts("nitter").await.unwrap();
        assert_eq!(accounts, ["alice"]);
    }
}

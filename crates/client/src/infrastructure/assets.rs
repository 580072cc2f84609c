//! Filesystem-backed background catalog.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::ports::BackgroundCatalogPort;

/// Verifies bundled background images against a directory on disk.
///
/// Catalog paths look like `/backgrounds/東京.jpg`; only the file name is
/// resolved against the configured root.
pub struct FsBackgroundCatalog {
    root: PathBuf,
}

impl FsBackgroundCatalog {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl BackgroundCatalogPort for FsBackgroundCatalog {
    async fn verify(&self, path: &str) -> bool {
        let file_name = path.rsplit('/').next().unwrap_or(path);
        if file_name.is_empty() {
            return false;
        }
        let candidate = self.root.join(file_name);
        tokio::fs::try_exists(&candidate).await.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_existing_file_verifies() {
        let dir = std::env::temp_dir().join("aikata-catalog-test");
        tokio::fs::create_dir_all(&dir).await.expect("mkdir");
        tokio::fs::write(dir.join("東京.jpg"), b"jpg").await.expect("write");

        let catalog = FsBackgroundCatalog::new(&dir);
        assert!(catalog.verify("/backgrounds/東京.jpg").await);
        assert!(!catalog.verify("/backgrounds/月面.jpg").await);
    }

    #[tokio::test]
    async fn test_empty_path_does_not_verify() {
        let catalog = FsBackgroundCatalog::new("/nonexistent");
        assert!(!catalog.verify("").await);
    }
}

//! Filesystem-backed blob store for article content and images.
//!
//! Blobs are addressed by slash-separated keys generated server-side
//! (`articles/{user}/{article}-{millis}.json`). The store maps keys onto
//! paths under its root directory; keys with empty, `.`, or `..` segments
//! never resolve, so nothing outside the root can be read or written.

use crate::errors::{Error, Result};
use std::path::PathBuf;

/// A blob store rooted at one directory.
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Opens a store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn resolve(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .split('/')
                .all(|segment| !segment.is_empty() && segment != "." && segment != "..");

        if !valid {
            return Err(Error::validation("Invalid blob key"));
        }

        Ok(self.root.join(key))
    }

    /// Writes a blob under `key`, creating parent directories and replacing
    /// any previous blob at the same key.
    pub async fn put(&self, key: &str, bytes: &[u8]) -> Result<()> {
        let path = self.resolve(key)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, bytes).await?;
        Ok(())
    }

    /// Reads the blob under `key`, returning None when it does not exist.
    pub async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.resolve(key)?;
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Deletes the blob under `key`. Deleting a missing blob is not an error.
    pub async fn delete(&self, key: &str) -> Result<()> {
        let path = self.resolve(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

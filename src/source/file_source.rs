use crate::{domain::BoardPayload, error::Result, source::DataSource};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Reads the board payload from a JSON file on disk
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DataSource for FileSource {
    async fn fetch(&self) -> Result<BoardPayload> {
        tracing::debug!(path = %self.path.display(), "reading board payload");

        let contents = fs::read_to_string(&self.path).await?;
        let payload: BoardPayload = serde_json::from_str(&contents)?;

        Ok(payload)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

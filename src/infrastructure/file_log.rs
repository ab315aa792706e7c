use crate::domain::ports::OrderLog;
use crate::error::{OrderError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

/// Default location of the order log, relative to the working directory.
pub const DEFAULT_LOG_PATH: &str = "orders.log";

/// Appends order summaries to a text file, creating it on first use.
#[derive(Debug, Clone)]
pub struct FileOrderLog {
    path: PathBuf,
}

impl FileOrderLog {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileOrderLog {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_PATH)
    }
}

#[async_trait]
impl OrderLog for FileOrderLog {
    async fn append(&self, line: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(OrderError::Log)?;

        file.write_all(line.as_bytes())
            .await
            .map_err(OrderError::Log)?;
        file.flush().await.map_err(OrderError::Log)?;

        Ok(())
    }
}

//! File-based persistence
//!
//! Stores the task list as one JSON array in a file on disk.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::task::Task;
use crate::Result;

use super::PersistenceAdapter;

/// Adapter backed by a single JSON file
pub struct FileAdapter {
    path: PathBuf,
}

impl FileAdapter {
    /// Create an adapter for the given path.
    ///
    /// A missing file loads as an empty list and is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PersistenceAdapter for FileAdapter {
    async fn load(&self) -> Result<Vec<Task>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&content)?)
    }

    async fn save(&self, tasks: &[Task]) -> Result<()> {
        let content = serde_json::to_string_pretty(&tasks)?;

        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }
}

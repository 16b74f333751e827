//! Durable store behind the `/todos` resource
//!
//! Tasks as JSON in a file on disk, cached in memory.

use std::collections::HashMap;
use std::path::PathBuf;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use todo_core::task::Task;
use todo_core::{Error, Result};

/// File-backed todo store
pub struct TodoStore {
    /// Path to the JSON file
    path: PathBuf,
    /// In-memory cache of tasks
    cache: RwLock<HashMap<Uuid, Task>>,
}

impl TodoStore {
    /// Open the store, loading any existing file.
    ///
    /// If the file doesn't exist, it will be created on first write.
    pub async fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let cache = if path.exists() {
            let content = tokio::fs::read_to_string(&path).await?;
            let tasks: Vec<Task> = serde_json::from_str(&content)?;
            tasks.into_iter().map(|t| (t.id, t)).collect()
        } else {
            HashMap::new()
        };

        Ok(Self {
            path,
            cache: RwLock::new(cache),
        })
    }

    /// Persist the cache to disk
    async fn persist(&self) -> Result<()> {
        let content = {
            let cache = self.cache.read().await;
            let mut tasks: Vec<&Task> = cache.values().collect();
            tasks.sort_by_key(|t| t.created_at);
            serde_json::to_string_pretty(&tasks)?
        };

        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }

    /// Insert a task. A duplicate id is rejected.
    pub async fn create(&self, task: Task) -> Result<Task> {
        {
            let mut cache = self.cache.write().await;
            if cache.contains_key(&task.id) {
                return Err(Error::Storage(format!(
                    "todo {} already exists",
                    task.id
                )));
            }
            cache.insert(task.id, task.clone());
        }
        self.persist().await?;
        Ok(task)
    }

    /// Get a task by id
    pub async fn get(&self, id: Uuid) -> Option<Task> {
        let cache = self.cache.read().await;
        cache.get(&id).cloned()
    }

    /// All tasks, oldest first
    pub async fn list(&self) -> Vec<Task> {
        let cache = self.cache.read().await;
        let mut tasks: Vec<Task> = cache.values().cloned().collect();
        tasks.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        tasks
    }

    /// Replace title and completion flag, refreshing the update timestamp
    pub async fn update(&self, id: Uuid, title: String, completed: bool) -> Result<Task> {
        let updated = {
            let mut cache = self.cache.write().await;
            let task = cache.get_mut(&id).ok_or(Error::TaskNotFound(id))?;
            task.title = title;
            task.completed = completed;
            task.updated_at = Utc::now();
            task.clone()
        };
        self.persist().await?;
        Ok(updated)
    }

    /// Delete a task by id. Returns false when the id is absent.
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let removed = {
            let mut cache = self.cache.write().await;
            cache.remove(&id).is_some()
        };
        if removed {
            self.persist().await?;
        }
        Ok(removed)
    }
}

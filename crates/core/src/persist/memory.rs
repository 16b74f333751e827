//! In-memory persistence, for tests and ephemeral runs

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::task::Task;
use crate::Result;

use super::PersistenceAdapter;

/// Adapter that keeps the durable copy in process memory.
///
/// Clones share the same backing list, which lets a test hold one clone
/// and inspect what a store wrote through the other.
#[derive(Clone, Default)]
pub struct MemoryAdapter {
    tasks: Arc<RwLock<Vec<Task>>>,
}

impl MemoryAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed with an existing task list
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks: Arc::new(RwLock::new(tasks)),
        }
    }

    /// The current durable copy
    pub async fn snapshot(&self) -> Vec<Task> {
        self.tasks.read().await.clone()
    }
}

#[async_trait]
impl PersistenceAdapter for MemoryAdapter {
    async fn load(&self) -> Result<Vec<Task>> {
        Ok(self.tasks.read().await.clone())
    }

    async fn save(&self, tasks: &[Task]) -> Result<()> {
        *self.tasks.write().await = tasks.to_vec();
        Ok(())
    }
}

//! Application state

use std::path::PathBuf;
use std::sync::Arc;

use crate::store::TodoStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    todos: TodoStore,
}

impl AppState {
    /// Create a new AppState with the given data directory
    pub async fn new(data_dir: PathBuf) -> todo_core::Result<Self> {
        let todos = TodoStore::new(data_dir.join("todos.json")).await?;

        Ok(Self {
            inner: Arc::new(AppStateInner { todos }),
        })
    }

    /// Get reference to the todo store
    pub fn todos(&self) -> &TodoStore {
        &self.inner.todos
    }
}

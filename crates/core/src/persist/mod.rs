//! Persistence adapters
//!
//! The task store is agnostic to where the durable copy lives; an adapter
//! owns the transport. `load` is the source of truth at attach time,
//! `save` rewrites the full list after every mutation.

mod file;
mod memory;
mod remote;
mod wire;

pub use file::FileAdapter;
pub use memory::MemoryAdapter;
pub use remote::RemoteAdapter;
pub use wire::WireTodo;

use async_trait::async_trait;

use crate::task::Task;
use crate::Result;

/// Durable storage for the task list
#[async_trait]
pub trait PersistenceAdapter: Send + Sync {
    /// Load the durable task list
    async fn load(&self) -> Result<Vec<Task>>;

    /// Persist the full task list
    async fn save(&self, tasks: &[Task]) -> Result<()>;
}

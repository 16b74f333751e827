//! Wire schema for the `/todos` resource
//!
//! The remote API predates the canonical field names: the completion flag
//! travels as `status` and the update timestamp as `last_update`. The
//! conversions live here so neither the store nor the routes deal in two
//! schemas.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::task::Task;

/// A task as it travels over the `/todos` resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireTodo {
    pub id: Uuid,
    pub title: String,
    pub status: bool,
    pub last_update: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<&Task> for WireTodo {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            title: task.title.clone(),
            status: task.completed,
            last_update: task.updated_at,
            created_at: task.created_at,
        }
    }
}

impl From<WireTodo> for Task {
    fn from(todo: WireTodo) -> Self {
        Self {
            id: todo.id,
            title: todo.title,
            completed: todo.status,
            created_at: todo.created_at,
            updated_at: todo.last_update,
        }
    }
}

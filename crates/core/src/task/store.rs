//! Task store
//!
//! Owns the in-memory task list and writes the full list through an
//! injected persistence adapter after every mutation.

use chrono::Utc;
use tracing::warn;
use uuid::Uuid;

use crate::persist::PersistenceAdapter;
use crate::{Error, Result};

use super::model::Task;
use super::views::{derive_views, TaskViews};

/// Whether the durable copy is being kept in sync
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistenceHealth {
    /// Mutations are written through to the adapter
    Persistent,
    /// The initial load failed; the list lives in memory only
    Degraded,
}

/// An in-progress title edit
///
/// At most one exists at a time; starting another discards it unsaved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub task_id: Uuid,
    pub draft: String,
}

/// What happened to a submitted input
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Created(Task),
    Updated(Task),
    /// Empty or whitespace-only input, dropped without error
    Rejected,
}

/// Authoritative owner of the live task list.
///
/// The adapter owns the durable copy and is the source of truth at attach
/// time; afterwards every mutation rewrites it in full. A failed write
/// rolls the staged change back, so the list never drifts from what the
/// caller was told.
pub struct TaskStore {
    tasks: Vec<Task>,
    adapter: Box<dyn PersistenceAdapter>,
    health: PersistenceHealth,
    edit: Option<EditSession>,
}

impl TaskStore {
    /// Load the store from the adapter's durable copy.
    ///
    /// If the load fails the store starts empty and degrades to an
    /// in-memory-only list: mutations keep working but are not saved.
    pub async fn attach(adapter: Box<dyn PersistenceAdapter>) -> Self {
        match adapter.load().await {
            Ok(tasks) => Self {
                tasks,
                adapter,
                health: PersistenceHealth::Persistent,
                edit: None,
            },
            Err(e) => {
                warn!("persistence unreachable, continuing in memory only: {e}");
                Self {
                    tasks: Vec::new(),
                    adapter,
                    health: PersistenceHealth::Degraded,
                    edit: None,
                }
            }
        }
    }

    /// The live task list, in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn health(&self) -> PersistenceHealth {
        self.health
    }

    /// The current edit session, if any
    pub fn edit(&self) -> Option<&EditSession> {
        self.edit.as_ref()
    }

    /// Derive the ongoing/completed views from the live list
    pub fn views(&self) -> TaskViews {
        derive_views(&self.tasks)
    }

    /// Append a new ongoing task.
    ///
    /// Empty and whitespace-only titles are dropped without error.
    pub async fn create(&mut self, title: &str) -> Result<Option<Task>> {
        let title = title.trim();
        if title.is_empty() {
            return Ok(None);
        }

        let task = Task::new(title);
        self.tasks.push(task.clone());
        if let Err(e) = self.flush().await {
            self.tasks.pop();
            return Err(e);
        }
        Ok(Some(task))
    }

    /// Replace the title of an existing task, keeping its completion flag.
    ///
    /// Empty titles are dropped without error; an absent id is reported as
    /// not-found and the list left unchanged.
    pub async fn update(&mut self, id: Uuid, title: &str) -> Result<Option<Task>> {
        let title = title.trim();
        if title.is_empty() {
            return Ok(None);
        }

        let idx = self.position(id)?;
        let previous = self.tasks[idx].clone();
        self.tasks[idx].title = title.to_string();
        self.tasks[idx].updated_at = Utc::now();
        if let Err(e) = self.flush().await {
            self.tasks[idx] = previous;
            return Err(e);
        }
        Ok(Some(self.tasks[idx].clone()))
    }

    /// Flip the completion flag of an existing task
    pub async fn toggle(&mut self, id: Uuid) -> Result<Task> {
        let idx = self.position(id)?;
        let previous = self.tasks[idx].clone();
        self.tasks[idx].completed = !self.tasks[idx].completed;
        self.tasks[idx].updated_at = Utc::now();
        if let Err(e) = self.flush().await {
            self.tasks[idx] = previous;
            return Err(e);
        }
        Ok(self.tasks[idx].clone())
    }

    /// Remove a task. Returns false when the id is absent.
    pub async fn delete(&mut self, id: Uuid) -> Result<bool> {
        let Some(idx) = self.tasks.iter().position(|t| t.id == id) else {
            return Ok(false);
        };

        let removed = self.tasks.remove(idx);
        if let Err(e) = self.flush().await {
            self.tasks.insert(idx, removed);
            return Err(e);
        }
        Ok(true)
    }

    /// Start editing a task; any prior session is discarded unsaved.
    ///
    /// The draft is initialized to the task's current title.
    pub fn begin_edit(&mut self, id: Uuid) -> Result<&EditSession> {
        let idx = self.position(id)?;
        let session = EditSession {
            task_id: id,
            draft: self.tasks[idx].title.clone(),
        };
        Ok(self.edit.insert(session))
    }

    /// Replace the draft text of the current session, if one exists
    pub fn set_draft(&mut self, text: impl Into<String>) {
        if let Some(session) = self.edit.as_mut() {
            session.draft = text.into();
        }
    }

    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    /// Route a submitted input: update when a session is active, create
    /// otherwise.
    ///
    /// The session target is validated against the live list, not the
    /// snapshot taken when editing began. A target deleted in the meantime
    /// ends the session and is reported as not-found; a persistence
    /// failure keeps the session so the input is not lost.
    pub async fn submit(&mut self, input: &str) -> Result<Submission> {
        let Some(session) = self.edit.take() else {
            return Ok(match self.create(input).await? {
                Some(task) => Submission::Created(task),
                None => Submission::Rejected,
            });
        };

        match self.update(session.task_id, input).await {
            Ok(Some(task)) => Ok(Submission::Updated(task)),
            Ok(None) => {
                self.edit = Some(session);
                Ok(Submission::Rejected)
            }
            Err(Error::TaskNotFound(id)) => Err(Error::TaskNotFound(id)),
            Err(e) => {
                self.edit = Some(session);
                Err(e)
            }
        }
    }

    fn position(&self, id: Uuid) -> Result<usize> {
        self.tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(Error::TaskNotFound(id))
    }

    /// Write the full list through the adapter, unless degraded
    async fn flush(&self) -> Result<()> {
        if self.health == PersistenceHealth::Degraded {
            return Ok(());
        }
        if let Err(e) = self.adapter.save(&self.tasks).await {
            warn!("persisting task list failed: {e}");
            return Err(e);
        }
        Ok(())
    }
}

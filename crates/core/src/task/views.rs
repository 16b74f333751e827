//! Derived task views
//!
//! Pure partition of the task list into the two rendered lists.

use super::model::Task;

/// The two read-only views derived from the task list
#[derive(Debug, Clone, Default)]
pub struct TaskViews {
    /// Not yet completed, oldest first
    pub ongoing: Vec<Task>,
    /// Completed, most recent first
    pub completed: Vec<Task>,
}

/// Partition tasks by completion flag.
///
/// Ongoing tasks are ordered ascending by creation time, completed tasks
/// descending. Every task lands in exactly one view.
pub fn derive_views(tasks: &[Task]) -> TaskViews {
    let mut ongoing: Vec<Task> = tasks.iter().filter(|t| !t.completed).cloned().collect();
    let mut completed: Vec<Task> = tasks.iter().filter(|t| t.completed).cloned().collect();

    ongoing.sort_by(|a, b| a.created_at.cmp(&b.created_at));
    completed.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    TaskViews { ongoing, completed }
}

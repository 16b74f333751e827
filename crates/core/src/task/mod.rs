//! Task module
//!
//! The task model, the store that owns the live list, and the derived views.

mod model;
mod store;
mod views;

pub use model::Task;
pub use store::{EditSession, PersistenceHealth, Submission, TaskStore};
pub use views::{derive_views, TaskViews};

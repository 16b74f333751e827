use clap::{Parser, Subcommand};
use uuid::Uuid;

/// todo — task tracking over a local file or a remote API
#[derive(Parser, Debug)]
#[command(name = "todo", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Base URL of the todos API (selects remote persistence)
    #[arg(long, global = true, env = "TODO_API_URL")]
    pub api_url: Option<String>,

    /// Path to the local task file (ignored when --api-url is set)
    #[arg(long, global = true, env = "TODO_DATA_FILE", default_value = "todos.json")]
    pub data_file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show ongoing and completed tasks
    List,
    /// Add a new task
    Add {
        /// Task title
        title: String,
    },
    /// Flip a task between ongoing and completed
    Toggle {
        /// Task id
        id: Uuid,
    },
    /// Replace a task's title
    Edit {
        /// Task id
        id: Uuid,
        /// New title
        title: String,
    },
    /// Delete a task
    Rm {
        /// Task id
        id: Uuid,
    },
}

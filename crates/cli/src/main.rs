//! Command-line front end for Remote Todos

mod cli;
mod render;

use clap::Parser;

use todo_core::persist::{FileAdapter, PersistenceAdapter, RemoteAdapter};
use todo_core::task::{PersistenceHealth, Submission, TaskStore};
use todo_core::Error;

use crate::cli::{Cli, Command};

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging();

    let adapter: Box<dyn PersistenceAdapter> = match &cli.api_url {
        Some(url) => {
            tracing::debug!("using remote persistence at {url}");
            Box::new(RemoteAdapter::new(url.clone()))
        }
        None => {
            tracing::debug!("using local data file {}", cli.data_file);
            Box::new(FileAdapter::new(&cli.data_file))
        }
    };

    let mut store = TaskStore::attach(adapter).await;
    if store.health() == PersistenceHealth::Degraded {
        eprintln!("warning: persistence is unreachable; changes will not be saved");
    }

    if let Err(e) = run(&mut store, cli.command).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(store: &mut TaskStore, command: Command) -> todo_core::Result<()> {
    match command {
        Command::List => {
            print!("{}", render::render_views(&store.views()));
        }
        Command::Add { title } => match store.create(&title).await? {
            Some(task) => println!("added {}", task.id),
            None => println!("nothing to add: title is empty"),
        },
        Command::Toggle { id } => {
            let task = store.toggle(id).await?;
            let state = if task.completed { "completed" } else { "ongoing" };
            println!("{} is now {}", task.id, state);
        }
        Command::Edit { id, title } => {
            store.begin_edit(id)?;
            match store.submit(&title).await? {
                Submission::Updated(task) => println!("updated {}", task.id),
                Submission::Created(task) => println!("added {}", task.id),
                Submission::Rejected => println!("nothing to update: title is empty"),
            }
        }
        Command::Rm { id } => {
            if store.delete(id).await? {
                println!("deleted {}", id);
            } else {
                return Err(Error::TaskNotFound(id));
            }
        }
    }
    Ok(())
}

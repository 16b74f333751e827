//! Terminal rendering of the two task views

use todo_core::task::{Task, TaskViews};

pub fn render_views(views: &TaskViews) -> String {
    let mut out = String::new();

    out.push_str("Ongoing Tasks\n");
    render_section(&mut out, &views.ongoing);

    out.push_str("\nCompleted Tasks\n");
    render_section(&mut out, &views.completed);

    out
}

fn render_section(out: &mut String, tasks: &[Task]) {
    if tasks.is_empty() {
        out.push_str("  (none)\n");
        return;
    }
    for task in tasks {
        out.push_str(&render_task(task));
    }
}

fn render_task(task: &Task) -> String {
    let marker = if task.completed { "x" } else { " " };
    format!(
        "  [{}] {}  {}  ({})\n",
        marker,
        task.id,
        task.title,
        task.updated_at.format("%d %b %Y %H:%M")
    )
}

//! Plain-text rendering of registry snapshots.

use chrono::{DateTime, Local, Utc};
use std::fmt::Write as _;
use taskboard_core::{RegistryStats, Task};

const RULE: &str = "==================================================";

fn format_timestamp(value: DateTime<Utc>) -> String {
    value
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// One-line summary, e.g. `Task[ID=TASK-0001, User=Alice, ...]`.
pub fn task_line(task: &Task) -> String {
    format!(
        "Task[ID={}, User={}, Description={}, Category={}, Status={}]",
        task.id(),
        task.assigned_user(),
        task.description(),
        task.category(),
        task.status()
    )
}

/// Multi-line block with every field and local-time timestamps.
pub fn task_detail(task: &Task) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Task ID: {}", task.id());
    let _ = writeln!(out, "User: {}", task.assigned_user());
    let _ = writeln!(out, "Description: {}", task.description());
    let _ = writeln!(out, "Category: {}", task.category());
    let _ = writeln!(out, "Status: {}", task.status());
    let _ = writeln!(out, "Created: {}", format_timestamp(task.created_at()));
    let _ = writeln!(out, "Updated: {}", format_timestamp(task.updated_at()));
    out
}

pub fn user_tasks(username: &str, tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return format!("\nNo tasks found for user '{username}'.\n");
    }

    let mut out = String::new();
    let _ = writeln!(out, "\n{RULE}");
    let _ = writeln!(out, "Tasks for User: {username}");
    let _ = writeln!(out, "{RULE}");
    for task in tasks {
        let _ = writeln!(out, "{}", task_detail(task));
    }
    out
}

pub fn stats(stats: &RegistryStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{RULE}");
    let _ = writeln!(out, "System Statistics");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Total Users: {}", stats.total_users);
    let _ = writeln!(out, "Total Tasks: {}", stats.total_tasks);
    let _ = writeln!(out, "Completed Tasks: {}", stats.completed);
    let _ = writeln!(out, "Pending Tasks: {}", stats.pending);
    let _ = writeln!(out, "{RULE}");
    out
}

//! Walkthrough of registry operations: a sequential CRUD pass followed by
//! concurrent bursts on OS threads.
//!
//! Worker threads never print; they return their outcomes and the calling
//! thread renders them after the join. Delays are taken outside the
//! registry, so they never extend a critical section.

use crate::render;
use log::warn;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;
use taskboard_core::{RegistryResult, TaskRegistry};

const DEMO_USERS: [&str; 3] = ["Alice", "Bob", "Charlie"];

const SEED_TASKS: [(&str, &str, &str); 6] = [
    ("Alice", "Complete project proposal", "Work"),
    ("Alice", "Review code changes", "Work"),
    ("Alice", "Buy groceries", "Personal"),
    ("Bob", "Prepare presentation", "Work"),
    ("Bob", "Call dentist", "Personal"),
    ("Charlie", "Fix bug in authentication", "Work"),
];

const CONCURRENT_TASKS: [(&str, &str, &str); 5] = [
    ("Alice", "Implement user authentication", "Work"),
    ("Bob", "Write unit tests", "Work"),
    ("Charlie", "Update documentation", "Work"),
    ("Alice", "Schedule team meeting", "Work"),
    ("Bob", "Code review for PR #123", "Work"),
];

/// Runs both demo parts against `registry`, writing progress to `out`.
pub fn run(registry: &TaskRegistry, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "PART 1: Basic CRUD Operations Demo\n")?;
    basic_operations(registry, out)?;

    writeln!(out, "\nPART 2: Concurrent Operations Demo\n")?;
    concurrent_creates(registry, out)?;
    concurrent_updates(registry, out)?;
    Ok(())
}

fn basic_operations(registry: &TaskRegistry, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "User Registration")?;
    for username in DEMO_USERS {
        let outcome = registry.register_user(username).map(|_| ());
        report(out, &format!("register '{username}'"), outcome)?;
    }

    writeln!(out, "\nCreating Tasks")?;
    for (username, description, category) in SEED_TASKS {
        match registry.create_task(username, description, category) {
            Ok(task) => writeln!(out, "Task '{}' created for user '{username}'.", task.id())?,
            Err(err) => writeln!(out, "Create failed: {err}")?,
        }
    }

    writeln!(out, "\nViewing Tasks")?;
    write!(out, "{}", render::user_tasks("Alice", &registry.tasks_of("Alice")))?;

    writeln!(out, "\nUpdating Tasks")?;
    report(
        out,
        "update TASK-0001 description",
        registry.update_task_description("TASK-0001", "Complete and submit project proposal"),
    )?;
    report(
        out,
        "update TASK-0003 category",
        registry.update_task_category("TASK-0003", "Shopping"),
    )?;

    writeln!(out, "\nCompleting Tasks")?;
    report(out, "complete TASK-0001", registry.complete_task("TASK-0001"))?;
    report(out, "complete TASK-0004", registry.complete_task("TASK-0004"))?;

    writeln!(out, "\nDeleting a Task")?;
    report(
        out,
        "delete TASK-0003",
        registry.delete_task("TASK-0003").map(|_| ()),
    )?;

    writeln!(out, "\nFinal Task List for Alice")?;
    write!(out, "{}", render::user_tasks("Alice", &registry.tasks_of("Alice")))?;
    Ok(())
}

fn concurrent_creates(registry: &TaskRegistry, out: &mut dyn Write) -> io::Result<()> {
    writeln!(
        out,
        "Starting concurrent operations with {} threads\n",
        CONCURRENT_TASKS.len()
    )?;

    let outcomes: Vec<String> = thread::scope(|scope| {
        let handles: Vec<_> = CONCURRENT_TASKS
            .iter()
            .enumerate()
            .map(|(index, &(username, description, category))| {
                scope.spawn(move || {
                    thread::sleep(stagger(index, 40));
                    let task = match registry.create_task(username, description, category) {
                        Ok(task) => task,
                        Err(err) => return format!("Create failed: {err}"),
                    };
                    if index % 2 == 0 {
                        thread::sleep(stagger(index, 10));
                        if let Err(err) = registry.complete_task(task.id().as_str()) {
                            return format!("Complete failed: {err}");
                        }
                        return format!("Task '{}' created and completed.", task.id());
                    }
                    format!("Task '{}' created for user '{username}'.", task.id())
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|_| "worker thread panicked".to_string())
            })
            .collect()
    });

    for line in outcomes {
        writeln!(out, "{line}")?;
    }
    writeln!(out, "\nAll concurrent operations completed\n")?;
    Ok(())
}

fn concurrent_updates(registry: &TaskRegistry, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "Demonstrating Concurrent Updates")?;

    let outcomes: Vec<(String, RegistryResult<()>)> = thread::scope(|scope| {
        let completer = scope.spawn(|| {
            thread::sleep(Duration::from_millis(10));
            vec![
                ("complete TASK-0007".to_string(), registry.complete_task("TASK-0007")),
                ("complete TASK-0009".to_string(), registry.complete_task("TASK-0009")),
            ]
        });
        let describer = scope.spawn(|| {
            thread::sleep(Duration::from_millis(15));
            vec![(
                "update TASK-0008 description".to_string(),
                registry.update_task_description("TASK-0008", "Write comprehensive unit tests"),
            )]
        });
        let categorizer = scope.spawn(|| {
            thread::sleep(Duration::from_millis(20));
            vec![(
                "update TASK-0010 category".to_string(),
                registry.update_task_category("TASK-0010", "Meeting"),
            )]
        });

        [completer, describer, categorizer]
            .into_iter()
            .flat_map(|handle| handle.join().unwrap_or_default())
            .collect()
    });

    for (label, outcome) in outcomes {
        report(out, &label, outcome)?;
    }

    writeln!(out, "\nTasks After Concurrent Updates")?;
    for username in ["Alice", "Bob"] {
        write!(out, "{}", render::user_tasks(username, &registry.tasks_of(username)))?;
    }
    Ok(())
}

fn report(out: &mut dyn Write, label: &str, outcome: RegistryResult<()>) -> io::Result<()> {
    match outcome {
        Ok(()) => writeln!(out, "{label}: ok"),
        Err(err) => {
            warn!("event=demo_step module=cli status={:?} step=\"{label}\"", err.kind());
            writeln!(out, "{label}: {err}")
        }
    }
}

fn stagger(index: usize, step_ms: u64) -> Duration {
    Duration::from_millis(step_ms * (index as u64 % 3))
}

//! Task domain model.
//!
//! # Responsibility
//! - Define the task record tracked by the registry.
//! - Provide mutators that keep the `updated_at` timestamp current.
//!
//! # Invariants
//! - `id`, `sequence`, `assigned_user` and `created_at` are set once.
//! - Every mutator calls `touch()`, so `updated_at` is monotonic.
//! - `status()` is derived from `completed` and has no storage of its own.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt::{Display, Formatter};

/// Registry-issued task identifier, e.g. `TASK-0001`.
///
/// The text form is presentational. Ordering by issuance uses
/// [`Task::sequence`] instead, since the text width may grow.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for TaskId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Completion projection of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    Completed,
}

impl TaskStatus {
    /// Human-facing label (`Pending` / `Completed`).
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Completed => "Completed",
        }
    }
}

impl Display for TaskStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A unit of work assigned to exactly one user.
///
/// Instances returned by the registry are snapshots. Mutating a snapshot
/// has no effect on registry state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    id: TaskId,
    #[serde(skip)]
    sequence: u64,
    description: String,
    category: String,
    assigned_user: String,
    completed: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a pending task stamped with the current time.
    ///
    /// `sequence` is the issuance number that `id` was rendered from.
    pub fn new(
        id: TaskId,
        sequence: u64,
        description: impl Into<String>,
        category: impl Into<String>,
        assigned_user: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            sequence,
            description: description.into(),
            category: category.into(),
            assigned_user: assigned_user.into(),
            completed: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &TaskId {
        &self.id
    }

    /// Issuance sequence; strictly increasing across one registry.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Username of the owning user.
    pub fn assigned_user(&self) -> &str {
        &self.assigned_user
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn status(&self) -> TaskStatus {
        if self.completed {
            TaskStatus::Completed
        } else {
            TaskStatus::Pending
        }
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
        self.touch();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
        self.touch();
    }

    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
        self.touch();
    }

    /// Case-insensitive category comparison used by category queries.
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }

    // Wall clocks can step backwards; clamp so updated_at never decreases.
    fn touch(&mut self) {
        self.updated_at = Utc::now().max(self.updated_at);
    }
}

//! User domain model.
//!
//! # Responsibility
//! - Hold a username and the ordered ids of the tasks it owns.
//!
//! # Invariants
//! - `username` is immutable and is the registry key.
//! - `task_ids` is ordered by task creation and contains no duplicates.

use crate::model::task::TaskId;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A registered user and the tasks linked to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    username: String,
    task_ids: Vec<TaskId>,
    created_at: DateTime<Utc>,
}

impl User {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            task_ids: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Ordered task ids, oldest first.
    pub fn task_ids(&self) -> &[TaskId] {
        &self.task_ids
    }

    /// Appends `task_id` unless it is already linked.
    pub fn add_task_id(&mut self, task_id: TaskId) {
        if !self.has_task(task_id.as_str()) {
            self.task_ids.push(task_id);
        }
    }

    /// Unlinks `task_id`. Returns `false` when it was not linked.
    pub fn remove_task_id(&mut self, task_id: &str) -> bool {
        match self.task_ids.iter().position(|id| id.as_str() == task_id) {
            Some(index) => {
                self.task_ids.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn has_task(&self, task_id: &str) -> bool {
        self.task_ids.iter().any(|id| id.as_str() == task_id)
    }

    pub fn task_count(&self) -> usize {
        self.task_ids.len()
    }
}

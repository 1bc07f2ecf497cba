//! Task registry and its error contract.
//!
//! # Responsibility
//! - Register users, issue task ids and create/update/delete tasks.
//! - Answer snapshot queries and aggregate statistics.
//!
//! # Invariants
//! - The id counter starts at 1, advances exactly once per successful
//!   `create_task`, and is never rewound, so deleted ids are not reused.
//! - Each mutating call runs its whole check-and-mutate step under the
//!   write lock. Queries read under the shared lock and therefore observe
//!   a state between two mutations, never inside one.
//! - No lock is held while logging or while the caller does anything else.

use crate::config::RegistryConfig;
use crate::model::task::{Task, TaskId};
use crate::model::user::User;
use log::{debug, info, warn};
use parking_lot::RwLock;
use serde::Serialize;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Soft failure returned by registry operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Referenced username is not registered.
    UserNotFound(String),
    /// Referenced task id does not exist (or was deleted).
    TaskNotFound(String),
    /// Username is already registered.
    UserAlreadyExists(String),
}

/// Coarse classification of [`RegistryError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryErrorKind {
    NotFound,
    AlreadyExists,
}

impl RegistryError {
    pub fn kind(&self) -> RegistryErrorKind {
        match self {
            Self::UserNotFound(_) | Self::TaskNotFound(_) => RegistryErrorKind::NotFound,
            Self::UserAlreadyExists(_) => RegistryErrorKind::AlreadyExists,
        }
    }

    fn status_code(&self) -> &'static str {
        match self.kind() {
            RegistryErrorKind::NotFound => "not_found",
            RegistryErrorKind::AlreadyExists => "already_exists",
        }
    }
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UserNotFound(username) => write!(f, "user not found: {username}"),
            Self::TaskNotFound(task_id) => write!(f, "task not found: {task_id}"),
            Self::UserAlreadyExists(username) => {
                write!(f, "user already exists: {username}")
            }
        }
    }
}

impl Error for RegistryError {}

/// Aggregate counts taken from one consistent view of the registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RegistryStats {
    pub total_users: usize,
    pub total_tasks: usize,
    pub completed: usize,
    pub pending: usize,
}

#[derive(Debug)]
struct RegistryState {
    users: HashMap<String, User>,
    tasks: HashMap<TaskId, Task>,
    next_sequence: u64,
}

impl RegistryState {
    fn new() -> Self {
        Self {
            users: HashMap::new(),
            tasks: HashMap::new(),
            next_sequence: 1,
        }
    }

    fn user_tasks(&self, username: &str) -> Vec<Task> {
        let Some(user) = self.users.get(username) else {
            return Vec::new();
        };
        user.task_ids()
            .iter()
            .filter_map(|id| self.tasks.get(id.as_str()))
            .cloned()
            .collect()
    }
}

/// Mutation-serializing owner of users, tasks and the task id counter.
///
/// Share one instance between threads with `Arc<TaskRegistry>`; every
/// method takes `&self`.
#[derive(Debug)]
pub struct TaskRegistry {
    config: RegistryConfig,
    state: RwLock<RegistryState>,
}

impl Default for TaskRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskRegistry {
    /// Creates an empty registry issuing `TASK-NNNN` ids.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            state: RwLock::new(RegistryState::new()),
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Registers a new user and returns its snapshot.
    ///
    /// # Errors
    /// - `UserAlreadyExists` when `username` is taken; the existing user is
    ///   left as it was.
    pub fn register_user(&self, username: impl Into<String>) -> RegistryResult<User> {
        let username = username.into();
        let result = {
            let mut state = self.state.write();
            if state.users.contains_key(username.as_str()) {
                Err(RegistryError::UserAlreadyExists(username))
            } else {
                let user = User::new(username.clone());
                state.users.insert(username, user.clone());
                Ok(user)
            }
        };

        match &result {
            Ok(_) => info!("event=user_register module=registry status=ok"),
            Err(err) => log_soft_failure("user_register", err),
        }
        result
    }

    /// Creates a task for `username` and links it to that user.
    ///
    /// Counter read-and-increment, id rendering, task insertion and the
    /// user-side link happen in one write-locked step.
    ///
    /// # Errors
    /// - `UserNotFound` when `username` is not registered. The counter does
    ///   not advance.
    pub fn create_task(
        &self,
        username: &str,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> RegistryResult<Task> {
        let result = {
            let mut guard = self.state.write();
            let state = &mut *guard;
            match state.users.get_mut(username) {
                None => Err(RegistryError::UserNotFound(username.to_string())),
                Some(user) => {
                    let sequence = state.next_sequence;
                    state.next_sequence += 1;
                    let task_id = TaskId::new(self.config.format_task_id(sequence));
                    let task = Task::new(
                        task_id.clone(),
                        sequence,
                        description,
                        category,
                        username,
                    );
                    state.tasks.insert(task_id.clone(), task.clone());
                    user.add_task_id(task_id);
                    Ok(task)
                }
            }
        };

        match &result {
            Ok(task) => info!(
                "event=task_create module=registry status=ok task_id={}",
                task.id()
            ),
            Err(err) => log_soft_failure("task_create", err),
        }
        result
    }

    /// Replaces the description of an existing task.
    ///
    /// # Errors
    /// - `TaskNotFound` when `task_id` is unknown.
    pub fn update_task_description(
        &self,
        task_id: &str,
        description: impl Into<String>,
    ) -> RegistryResult<()> {
        self.mutate_task("task_update_description", task_id, |task| {
            task.set_description(description)
        })
    }

    /// Replaces the category of an existing task.
    ///
    /// # Errors
    /// - `TaskNotFound` when `task_id` is unknown.
    pub fn update_task_category(
        &self,
        task_id: &str,
        category: impl Into<String>,
    ) -> RegistryResult<()> {
        self.mutate_task("task_update_category", task_id, |task| {
            task.set_category(category)
        })
    }

    /// Marks a task completed.
    ///
    /// # Errors
    /// - `TaskNotFound` when `task_id` is unknown.
    pub fn complete_task(&self, task_id: &str) -> RegistryResult<()> {
        self.mutate_task("task_complete", task_id, |task| task.set_completed(true))
    }

    /// Marks a task pending again.
    ///
    /// # Errors
    /// - `TaskNotFound` when `task_id` is unknown.
    pub fn uncomplete_task(&self, task_id: &str) -> RegistryResult<()> {
        self.mutate_task("task_uncomplete", task_id, |task| task.set_completed(false))
    }

    /// Removes a task and unlinks it from its owner. Returns the removed
    /// task snapshot.
    ///
    /// A task whose owner is missing is still removed; the unlink step is
    /// skipped. Under the referential invariant this never happens.
    ///
    /// # Errors
    /// - `TaskNotFound` when `task_id` is unknown.
    pub fn delete_task(&self, task_id: &str) -> RegistryResult<Task> {
        let (result, owner_missing) = {
            let mut state = self.state.write();
            match state.tasks.remove(task_id) {
                None => (Err(RegistryError::TaskNotFound(task_id.to_string())), false),
                Some(task) => match state.users.get_mut(task.assigned_user()) {
                    Some(user) => {
                        user.remove_task_id(task_id);
                        (Ok(task), false)
                    }
                    None => (Ok(task), true),
                },
            }
        };

        match &result {
            Ok(task) => {
                if owner_missing {
                    warn!(
                        "event=task_delete module=registry status=owner_missing task_id={}",
                        task.id()
                    );
                }
                info!(
                    "event=task_delete module=registry status=ok task_id={}",
                    task.id()
                );
            }
            Err(err) => log_soft_failure("task_delete", err),
        }
        result
    }

    /// Returns a snapshot of one user.
    pub fn get_user(&self, username: &str) -> Option<User> {
        self.state.read().users.get(username).cloned()
    }

    /// Returns a snapshot of one task.
    pub fn get_task(&self, task_id: &str) -> Option<Task> {
        self.state.read().tasks.get(task_id).cloned()
    }

    /// Tasks owned by `username` in creation order. Unknown users yield an
    /// empty list.
    pub fn tasks_of(&self, username: &str) -> Vec<Task> {
        self.state.read().user_tasks(username)
    }

    pub fn pending_tasks_of(&self, username: &str) -> Vec<Task> {
        let mut tasks = self.tasks_of(username);
        tasks.retain(|task| !task.is_completed());
        tasks
    }

    pub fn completed_tasks_of(&self, username: &str) -> Vec<Task> {
        let mut tasks = self.tasks_of(username);
        tasks.retain(Task::is_completed);
        tasks
    }

    /// Tasks whose category matches `category` ignoring case, in issuance
    /// order.
    pub fn tasks_by_category(&self, category: &str) -> Vec<Task> {
        let mut tasks: Vec<Task> = self
            .state
            .read()
            .tasks
            .values()
            .filter(|task| task.in_category(category))
            .cloned()
            .collect();
        tasks.sort_by_key(Task::sequence);
        tasks
    }

    /// Every task in issuance order.
    pub fn all_tasks(&self) -> Vec<Task> {
        let mut tasks: Vec<Task> = self.state.read().tasks.values().cloned().collect();
        tasks.sort_by_key(Task::sequence);
        tasks
    }

    /// Every user ordered by username.
    pub fn all_users(&self) -> Vec<User> {
        let mut users: Vec<User> = self.state.read().users.values().cloned().collect();
        users.sort_by(|left, right| left.username().cmp(right.username()));
        users
    }

    pub fn user_count(&self) -> usize {
        self.state.read().users.len()
    }

    pub fn task_count(&self) -> usize {
        self.state.read().tasks.len()
    }

    /// Sequence the next successful `create_task` will use.
    pub fn next_task_sequence(&self) -> u64 {
        self.state.read().next_sequence
    }

    /// Aggregate user/task counts from a single read.
    pub fn stats(&self) -> RegistryStats {
        let state = self.state.read();
        let completed = state
            .tasks
            .values()
            .filter(|task| task.is_completed())
            .count();
        RegistryStats {
            total_users: state.users.len(),
            total_tasks: state.tasks.len(),
            completed,
            pending: state.tasks.len() - completed,
        }
    }

    fn mutate_task<F>(&self, event: &str, task_id: &str, apply: F) -> RegistryResult<()>
    where
        F: FnOnce(&mut Task),
    {
        let result = {
            let mut state = self.state.write();
            match state.tasks.get_mut(task_id) {
                Some(task) => {
                    apply(task);
                    Ok(())
                }
                None => Err(RegistryError::TaskNotFound(task_id.to_string())),
            }
        };

        match &result {
            Ok(()) => debug!("event={event} module=registry status=ok task_id={task_id}"),
            Err(err) => log_soft_failure(event, err),
        }
        result
    }
}

fn log_soft_failure(event: &str, err: &RegistryError) {
    debug!(
        "event={event} module=registry status={} reason=\"{err}\"",
        err.status_code()
    );
}

//! In-process registry of users and their tasks.
//!
//! # Responsibility
//! - Own the username -> user and task id -> task maps plus the id counter.
//! - Serialize every mutation through one lock per registry instance.
//!
//! # Invariants
//! - Every id in a user's `task_ids` names a task assigned to that user, and
//!   every task names a registered user.
//! - Soft failures (`RegistryError`) leave registry state untouched.
//! - Query results are owned snapshots, never references into the maps.

pub mod task_registry;

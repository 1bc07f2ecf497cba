//! Domain records owned by the task registry.
//!
//! # Responsibility
//! - Define the `Task` and `User` records and their plain data operations.
//! - Keep identity fields immutable after construction.
//!
//! # Invariants
//! - A task's `id`, `assigned_user` and `created_at` never change.
//! - `updated_at >= created_at` for every task, and never moves backwards.
//! - A user's `task_ids` holds no duplicates and keeps insertion order.
//!
//! Records carry no synchronization of their own; the registry serializes
//! every mutation that reaches them.

pub mod task;
pub mod user;

//! Core registry of users and the tasks assigned to them.
//! This crate owns the id allocation and referential integrity rules; callers
//! only ever receive snapshots.

pub mod config;
pub mod logging;
pub mod model;
pub mod registry;

pub use config::RegistryConfig;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Task, TaskId, TaskStatus};
pub use model::user::User;
pub use registry::task_registry::{
    RegistryError, RegistryErrorKind, RegistryResult, RegistryStats, TaskRegistry,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

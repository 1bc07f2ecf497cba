//! Registry configuration.
//!
//! # Responsibility
//! - Hold presentation settings for registry-issued task identifiers.
//!
//! # Invariants
//! - Identifier rendering never truncates: a sequence wider than
//!   `task_id_width` is rendered in full.

const DEFAULT_TASK_ID_PREFIX: &str = "TASK-";
const DEFAULT_TASK_ID_WIDTH: usize = 4;

/// Settings applied by a `TaskRegistry` instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Text placed before the zero-padded sequence.
    pub task_id_prefix: String,
    /// Minimum digit count of the sequence part.
    pub task_id_width: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            task_id_prefix: DEFAULT_TASK_ID_PREFIX.to_string(),
            task_id_width: DEFAULT_TASK_ID_WIDTH,
        }
    }
}

impl RegistryConfig {
    pub fn with_task_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.task_id_prefix = prefix.into();
        self
    }

    pub fn with_task_id_width(mut self, width: usize) -> Self {
        self.task_id_width = width;
        self
    }

    /// Renders the identifier text for one issuance sequence.
    pub fn format_task_id(&self, sequence: u64) -> String {
        format!(
            "{}{:0width$}",
            self.task_id_prefix,
            sequence,
            width = self.task_id_width
        )
    }
}

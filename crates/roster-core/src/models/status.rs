//! Status enumeration for tasks.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of task statuses.
///
/// The status is monotonic: a task moves from [`TaskStatus::Incomplete`] to
/// [`TaskStatus::Complete`] exactly once and never back.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Task still needs doing
    #[default]
    Incomplete,

    /// Task has been completed
    Complete,
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "incomplete" => Ok(TaskStatus::Incomplete),
            "complete" => Ok(TaskStatus::Complete),
            _ => Err(format!("Invalid task status: {s}")),
        }
    }
}

impl TaskStatus {
    /// Convert to the on-disk string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Incomplete => "incomplete",
            TaskStatus::Complete => "complete",
        }
    }
}

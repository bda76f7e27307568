//! Task record definition and related functionality.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{TaskStatus, UserId};

/// Current on-disk schema version for [`TaskRecord`].
pub const TASK_SCHEMA_VERSION: u32 = 1;

fn default_schema_version() -> u32 {
    TASK_SCHEMA_VERSION
}

/// A unit of shared work tracked by the roster.
///
/// Field declaration order doubles as the on-disk key order; the collection
/// is persisted as one JSON array of these records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskRecord {
    /// Schema version tag; files written before the tag existed load as 1
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Unique identifier, a UUID v4 generated at creation; never changes
    pub id: String,

    /// Short task name shown in lists and selection prompts
    pub name: String,

    /// Longer free-form description
    pub description: String,

    /// Responsible users in mention order; never empty, duplicates allowed
    pub assignees: Vec<UserId>,

    /// Optional due date, serialized as `YYYY-MM-DD`, `null` when absent
    pub due_date: Option<Date>,

    /// Completion status; moves incomplete→complete only
    pub status: TaskStatus,

    /// User who created the task, set once
    pub added_by: UserId,
}

impl TaskRecord {
    /// Create a new incomplete task with a fresh unique id.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        assignees: Vec<UserId>,
        due_date: Option<Date>,
        added_by: UserId,
    ) -> Self {
        Self {
            schema_version: TASK_SCHEMA_VERSION,
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            description: description.into(),
            assignees,
            due_date,
            status: TaskStatus::Incomplete,
            added_by,
        }
    }

    /// Whether the task still needs doing.
    pub fn is_open(&self) -> bool {
        self.status == TaskStatus::Incomplete
    }
}

/// Outcome of a completion attempt against the current collection.
///
/// "Not found" and "already complete" are expected, benign conditions (a
/// selection can race another completion or outlive a deleted file), so they
/// are data rather than errors.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// The task was open and is now complete; the persisted record
    Done(TaskRecord),

    /// No task with the given id exists in the current collection
    NotFound,

    /// The task was already complete; nothing was changed or written
    AlreadyComplete(TaskRecord),
}

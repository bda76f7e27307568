//! Data models for tasks and the people they are assigned to.
//!
//! This module contains the domain types of the roster: the [`TaskRecord`]
//! entity, its [`TaskStatus`], the opaque [`UserId`] token, query filtering,
//! and the pure mention-extraction function. Presentation lives elsewhere:
//! Display implementations for user-facing output are in [`crate::display`],
//! keeping data structures free of formatting concerns.
//!
//! # Examples
//!
//! ```rust
//! use roster_core::models::{extract_mentions, TaskRecord, TaskStatus, UserId};
//!
//! let assignees = extract_mentions("for <@100> and <@!200>");
//! let task = TaskRecord::new("Buy milk", "Two liters", assignees, None, UserId(100));
//!
//! assert_eq!(task.status, TaskStatus::Incomplete);
//! assert_eq!(task.assignees, vec![UserId(100), UserId(200)]);
//! ```

pub mod filters;
pub mod mentions;
pub mod page;
pub mod status;
pub mod task;
pub mod user;

#[cfg(test)]
mod tests;

// Re-export all public types at the models level
pub use filters::TaskFilter;
pub use mentions::extract_mentions;
pub use page::{TaskPage, SELECT_CEILING};
pub use status::TaskStatus;
pub use task::{Completion, TaskRecord, TASK_SCHEMA_VERSION};
pub use user::UserId;

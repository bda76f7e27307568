//! Parameter structures for roster operations
//!
//! This module contains shared parameter structures that can be used across
//! different interfaces (CLI today, a chat-platform adapter tomorrow) without
//! framework-specific derives or dependencies. Interface layers own their own
//! argument types and convert into these, so the core never learns about
//! clap or any platform SDK.
//!
//! Raw user input (mention text, due-date strings) stays raw in the
//! parameter struct; [`AddTask::validate`] turns it into typed values and is
//! the single place creation input is checked.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::models::{extract_mentions, UserId};

/// Parameters for creating a new task.
///
/// `assignees` is the raw mention text as typed by the user; extraction and
/// the default-to-invoker rule happen in [`AddTask::validate`]. Likewise
/// `due_date` stays a string until validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTask {
    /// Short name of the task (required, non-empty)
    pub name: String,
    /// Longer description of the task (required, non-empty)
    pub description: String,
    /// Raw assignee mention text, e.g. `"<@100> <@!200>"`
    pub assignees: Option<String>,
    /// Due date in `YYYY-MM-DD` form
    pub due_date: Option<String>,
    /// The invoking user, also the fallback assignee
    pub added_by: UserId,
}

impl AddTask {
    /// Validate creation parameters and return the resolved assignee list
    /// and parsed due date.
    ///
    /// Runs before any storage access, so a rejected request performs zero
    /// writes.
    ///
    /// # Errors
    ///
    /// * `RosterError::InvalidInput` - empty name or description
    /// * `RosterError::InvalidInput` - due date that is not a real calendar
    ///   date in `YYYY-MM-DD` form
    ///
    /// # Examples
    ///
    /// ```rust
    /// use roster_core::models::UserId;
    /// use roster_core::params::AddTask;
    ///
    /// let params = AddTask {
    ///     name: "Buy milk".to_string(),
    ///     description: "Two liters".to_string(),
    ///     assignees: None,
    ///     due_date: Some("2024-02-01".to_string()),
    ///     added_by: UserId(100),
    /// };
    /// let (assignees, due) = params.validate()?;
    /// assert_eq!(assignees, vec![UserId(100)]);
    /// assert_eq!(due.unwrap().to_string(), "2024-02-01");
    /// # use roster_core::Result;
    /// # Result::<()>::Ok(())
    /// ```
    pub fn validate(&self) -> crate::Result<(Vec<UserId>, Option<Date>)> {
        if self.name.trim().is_empty() {
            return Err(crate::RosterError::invalid_input("task_name")
                .with_reason("Task name must not be empty"));
        }
        if self.description.trim().is_empty() {
            return Err(crate::RosterError::invalid_input("description")
                .with_reason("Description must not be empty"));
        }

        let mut assignees = match &self.assignees {
            Some(raw) => extract_mentions(raw),
            None => Vec::new(),
        };
        if assignees.is_empty() {
            assignees = vec![self.added_by];
        }

        let due = match &self.due_date {
            Some(raw) => Some(Date::strptime("%Y-%m-%d", raw).map_err(|_| {
                crate::RosterError::invalid_input("due_date").with_reason(format!(
                    "Invalid due date '{raw}'. Must be a real calendar date in YYYY-MM-DD form"
                ))
            })?),
            None => None,
        };

        Ok((assignees, due))
    }
}

/// Which slice of the open tasks a listing should cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryScope {
    /// Only tasks assigned to the requester
    Mine,
    /// Every open task regardless of assignee
    All,
}

/// Parameters for listing open tasks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TaskQuery {
    /// The user asking; also the assignee filter for [`QueryScope::Mine`]
    pub requester: UserId,
    /// Listing scope
    pub scope: QueryScope,
}

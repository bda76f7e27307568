//! Filter types for querying tasks.

use super::{TaskRecord, UserId};
use crate::params::{QueryScope, TaskQuery};

/// Filter options for listing open tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskFilter {
    /// Restrict to tasks whose assignee set contains this user
    pub assignee: Option<UserId>,
}

impl TaskFilter {
    /// Whether a record passes this filter.
    ///
    /// Only incomplete tasks ever pass; the assignee restriction applies on
    /// top when present.
    pub fn matches(&self, task: &TaskRecord) -> bool {
        if !task.is_open() {
            return false;
        }
        match self.assignee {
            Some(user) => task.assignees.contains(&user),
            None => true,
        }
    }
}

impl From<&TaskQuery> for TaskFilter {
    /// Convert query parameters to a record filter.
    ///
    /// `Mine` restricts to the requester's own tasks; `All` keeps every open
    /// task regardless of assignee.
    fn from(query: &TaskQuery) -> Self {
        match query.scope {
            QueryScope::Mine => Self {
                assignee: Some(query.requester),
            },
            QueryScope::All => Self::default(),
        }
    }
}

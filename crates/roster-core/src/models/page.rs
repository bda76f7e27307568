//! Truncated task listings for display and selection.

use super::TaskRecord;

/// Display ceiling imposed by the selection widget: at most this many tasks
/// are listed or offered for completion in one reply.
pub const SELECT_CEILING: usize = 25;

/// The first page of a filtered task listing.
///
/// Holds at most [`SELECT_CEILING`] records plus the untruncated match
/// count, so rendering can flag partial results.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskPage {
    /// Matching records in insertion order, truncated to the ceiling
    pub tasks: Vec<TaskRecord>,

    /// Number of matches before truncation
    pub total: usize,
}

impl TaskPage {
    /// Build a page from the full filtered match list.
    pub fn from_matches(matches: Vec<TaskRecord>) -> Self {
        let total = matches.len();
        let mut tasks = matches;
        tasks.truncate(SELECT_CEILING);
        Self { tasks, total }
    }

    /// Whether matches beyond the ceiling were dropped.
    pub fn is_truncated(&self) -> bool {
        self.total > self.tasks.len()
    }

    /// Whether nothing matched at all.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of records on this page.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }
}

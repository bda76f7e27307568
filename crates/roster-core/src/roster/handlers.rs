//! Command handlers that return formatted reply types for the Roster.

use super::Roster;
use crate::{
    display::Summary,
    error::Result,
    models::TaskFilter,
    params::{AddTask, TaskQuery},
    prompt::SelectionPrompt,
};

/// Reply to a listing command.
///
/// Bundles the rendered summary with the completion prompt offered over the
/// listed tasks. The prompt is absent when the listing is empty.
#[derive(Debug)]
pub struct CheckReply {
    /// Summary of the listed tasks, or the empty notice
    pub summary: Summary,
    /// Completion prompt over the listed tasks
    pub prompt: Option<SelectionPrompt>,
}

impl Roster {
    /// Handle recording a new task.
    ///
    /// Validates the raw command input, persists the resulting record, and
    /// returns the channel announcement for it.
    ///
    /// # Arguments
    ///
    /// * `params` - Creation parameters as typed by the user
    ///
    /// # Returns
    ///
    /// A Summary announcing the new task, with its id in the footer
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use roster_core::{models::UserId, params::AddTask, RosterBuilder};
    /// # async {
    /// let roster = RosterBuilder::new().build().await?;
    /// let params = AddTask {
    ///     name: "Buy milk".to_string(),
    ///     description: "Two liters".to_string(),
    ///     assignees: None,
    ///     due_date: None,
    ///     added_by: UserId(42),
    /// };
    /// let summary = roster.handle_add(&params).await?;
    /// # Result::<(), roster_core::RosterError>::Ok(())
    /// # };
    /// ```
    pub async fn handle_add(&self, params: &AddTask) -> Result<Summary> {
        let record = self.add_task(params).await?;
        Ok(Summary::task_added(&record))
    }

    /// Handle a task listing command.
    ///
    /// Loads the open tasks matching the query scope and pairs the rendered
    /// list with a selection prompt over the same tasks. An empty result is
    /// reported to the invoker alone, with no prompt.
    ///
    /// # Arguments
    ///
    /// * `query` - Requester and scope of the listing
    ///
    /// # Returns
    ///
    /// A CheckReply holding the list summary and, when the listing is
    /// non-empty, a prompt over at most
    /// [`SELECT_CEILING`](crate::models::SELECT_CEILING) tasks
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use roster_core::{models::UserId, params::{QueryScope, TaskQuery}, RosterBuilder};
    /// # async {
    /// let roster = RosterBuilder::new().build().await?;
    /// let query = TaskQuery {
    ///     requester: UserId(42),
    ///     scope: QueryScope::Mine,
    /// };
    /// let reply = roster.handle_check(&query).await?;
    /// # Result::<(), roster_core::RosterError>::Ok(())
    /// # };
    /// ```
    pub async fn handle_check(&self, query: &TaskQuery) -> Result<CheckReply> {
        let page = self.incomplete_tasks(TaskFilter::from(query)).await?;
        if page.is_empty() {
            return Ok(CheckReply {
                summary: Summary::no_open_tasks(query),
                prompt: None,
            });
        }

        let prompt = SelectionPrompt::new(&page.tasks);
        Ok(CheckReply {
            summary: Summary::task_list(query, &page),
            prompt: Some(prompt),
        })
    }
}

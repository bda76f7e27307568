//! Task operations for the Roster.

use tokio::task;

use super::Roster;
use crate::{
    error::{Result, RosterError},
    models::{Completion, TaskFilter, TaskPage, TaskRecord, TaskStatus},
    params::AddTask,
};

impl Roster {
    /// Creates a task from validated parameters and persists it.
    ///
    /// Validation runs before any file access, so a rejected request leaves
    /// the store untouched. The collection is then reloaded, the new record
    /// appended, and the whole file rewritten under the access gate.
    pub async fn add_task(&self, params: &AddTask) -> Result<TaskRecord> {
        let (assignees, due_date) = params.validate()?;
        let record = TaskRecord::new(
            params.name.clone(),
            params.description.clone(),
            assignees,
            due_date,
            params.added_by,
        );

        let _gate = self.gate.lock().await;
        let store = self.store.clone();
        let new_task = record.clone();
        task::spawn_blocking(move || {
            let mut tasks = store.load()?;
            tasks.push(new_task);
            store.save(&tasks)
        })
        .await
        .map_err(|e| RosterError::runtime(format!("Task join error: {e}")))??;

        Ok(record)
    }

    /// Lists open tasks matching the filter, truncated to the selection
    /// ceiling.
    pub async fn incomplete_tasks(&self, filter: TaskFilter) -> Result<TaskPage> {
        let _gate = self.gate.lock().await;
        let store = self.store.clone();
        let matches = task::spawn_blocking(move || {
            let tasks = store.load()?;
            Ok::<_, RosterError>(
                tasks
                    .into_iter()
                    .filter(|task| filter.matches(task))
                    .collect::<Vec<_>>(),
            )
        })
        .await
        .map_err(|e| RosterError::runtime(format!("Task join error: {e}")))??;

        Ok(TaskPage::from_matches(matches))
    }

    /// Marks the task with the given id complete, if it is still open.
    ///
    /// The collection is reloaded before the lookup, so a selection made
    /// from a stale listing resolves against current state. The file is
    /// rewritten only when a task actually flips to complete.
    pub async fn complete_task(&self, task_id: &str) -> Result<Completion> {
        let _gate = self.gate.lock().await;
        let store = self.store.clone();
        let task_id = task_id.to_string();
        task::spawn_blocking(move || {
            let mut tasks = store.load()?;
            let Some(task) = tasks.iter_mut().find(|task| task.id == task_id) else {
                return Ok(Completion::NotFound);
            };
            if !task.is_open() {
                return Ok(Completion::AlreadyComplete(task.clone()));
            }
            task.status = TaskStatus::Complete;
            let completed = task.clone();
            store.save(&tasks)?;
            Ok(Completion::Done(completed))
        })
        .await
        .map_err(|e| RosterError::runtime(format!("Task join error: {e}")))?
    }
}

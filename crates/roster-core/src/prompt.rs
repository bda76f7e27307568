//! Time-limited completion prompts over a task listing.
//!
//! A [`SelectionPrompt`] is the interactive half of a listing reply: the
//! candidates captured at render time, offered for completion until a
//! selection resolves the prompt or its window elapses. The prompt holds no
//! timer of its own; the hosting surface drives expiry by calling
//! [`SelectionPrompt::expire`] once the advertised window runs out.
//!
//! # Examples
//!
//! ```rust,no_run
//! # use roster_core::{models::UserId, params::{QueryScope, TaskQuery}, RosterBuilder};
//! # async {
//! let roster = RosterBuilder::new().build().await?;
//! let query = TaskQuery {
//!     requester: UserId(42),
//!     scope: QueryScope::All,
//! };
//! let reply = roster.handle_check(&query).await?;
//!
//! if let Some(mut prompt) = reply.prompt {
//!     let task_id = prompt.candidates()[0].id.clone();
//!     let selection = prompt.select(&roster, &task_id).await?;
//!     println!("{selection:?}");
//! }
//! # Result::<(), roster_core::RosterError>::Ok(())
//! # };
//! ```

use std::time::Duration;

use crate::{
    error::Result,
    models::{Completion, TaskRecord, SELECT_CEILING},
    roster::Roster,
};

/// Default selection window before a prompt expires.
pub const DEFAULT_WINDOW: Duration = Duration::from_secs(300);

/// One selectable entry: the task id paired with the label shown for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Id submitted when this entry is picked
    pub id: String,

    /// Task name shown to the user
    pub name: String,
}

/// Lifecycle of a selection prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptState {
    /// Accepting selections
    Active,

    /// A selection completed a task; no further input is accepted
    Resolved,

    /// The window elapsed without a completion; inert
    Expired,
}

/// Outcome of one selection attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// The chosen task is now complete
    Completed(TaskRecord),

    /// No task with that id exists anymore
    NotFound {
        /// The id that was submitted
        id: String,
    },

    /// The task was already complete; nothing changed
    AlreadyComplete(TaskRecord),

    /// The prompt was already resolved or expired
    Inactive,
}

/// A one-shot completion widget over a fixed candidate list.
///
/// Candidates are a snapshot of the listing the prompt was rendered with,
/// capped at [`SELECT_CEILING`]. Resolution never trusts that snapshot:
/// every selection re-reads current state through the roster.
#[derive(Debug, Clone)]
pub struct SelectionPrompt {
    candidates: Vec<Candidate>,
    state: PromptState,
    window: Duration,
}

impl SelectionPrompt {
    /// Builds an active prompt over the given tasks, keeping at most
    /// [`SELECT_CEILING`] candidates.
    pub fn new(tasks: &[TaskRecord]) -> Self {
        let candidates = tasks
            .iter()
            .take(SELECT_CEILING)
            .map(|task| Candidate {
                id: task.id.clone(),
                name: task.name.clone(),
            })
            .collect();
        Self {
            candidates,
            state: PromptState::Active,
            window: DEFAULT_WINDOW,
        }
    }

    /// Overrides the selection window advertised to the hosting surface.
    pub fn with_window(mut self, window: Duration) -> Self {
        self.window = window;
        self
    }

    /// The selectable entries, in listing order.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Current lifecycle state.
    pub fn state(&self) -> PromptState {
        self.state
    }

    /// Whether the prompt still accepts selections.
    pub fn is_active(&self) -> bool {
        self.state == PromptState::Active
    }

    /// How long the prompt should stay open.
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Applies a selection against current state.
    ///
    /// The submitted id is handed to the roster, which reloads the
    /// collection before resolving it, so a prompt rendered from a stale
    /// listing still completes the right task or reports what happened to
    /// it.
    ///
    /// Only [`Selection::Completed`] resolves the prompt. The benign
    /// outcomes, an id that no longer exists or a task someone else already
    /// completed, leave the prompt active so another entry can be picked.
    pub async fn select(&mut self, roster: &Roster, task_id: &str) -> Result<Selection> {
        if self.state != PromptState::Active {
            return Ok(Selection::Inactive);
        }

        match roster.complete_task(task_id).await? {
            Completion::Done(task) => {
                self.state = PromptState::Resolved;
                Ok(Selection::Completed(task))
            }
            Completion::NotFound => Ok(Selection::NotFound {
                id: task_id.to_string(),
            }),
            Completion::AlreadyComplete(task) => Ok(Selection::AlreadyComplete(task)),
        }
    }

    /// Retires an active prompt.
    ///
    /// Called by the hosting surface when the selection window elapses.
    /// Expiry is not an error: an expired prompt answers every further
    /// attempt with [`Selection::Inactive`] and the task list is left
    /// alone. A resolved prompt stays resolved.
    pub fn expire(&mut self) {
        if self.state == PromptState::Active {
            self.state = PromptState::Expired;
        }
    }
}

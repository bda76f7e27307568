//! Rendering requests produced by command handlers.
//!
//! A [`Summary`] is the platform-neutral reply shape: optional title,
//! labelled fields, optional footer, plus the audience it is meant for. The
//! Display implementation renders it as markdown for terminal output; a chat
//! surface would map the same structure onto its native rich message type
//! instead.

use std::fmt;

use super::{DueDate, Mention, MentionList};
use crate::{
    models::{TaskPage, TaskRecord, UserId, SELECT_CEILING},
    params::{QueryScope, TaskQuery},
    prompt::Selection,
};

/// Where a summary should be delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    /// Shown only to the user who issued the command
    Invoker,

    /// Posted for the whole channel
    Channel,
}

/// One labelled value within a summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Label shown for the value
    pub name: String,

    /// Rendered value; multi-line values render as their own block
    pub value: String,
}

impl Field {
    /// Creates a field from a label and an already rendered value.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A structured reply ready for rendering.
///
/// Handlers never format free-form text beyond individual values; they
/// describe the reply with this type and leave layout to the output side.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Heading, absent for bare notices
    pub title: Option<String>,

    /// Leading paragraph
    pub description: Option<String>,

    /// Labelled values in display order
    pub fields: Vec<Field>,

    /// Trailing line, rendered de-emphasized
    pub footer: Option<String>,

    /// Intended delivery scope
    pub audience: Audience,
}

impl Summary {
    /// A plain notice carrying a single sentence.
    pub fn notice(text: impl Into<String>, audience: Audience) -> Self {
        Self {
            title: None,
            description: Some(text.into()),
            fields: Vec::new(),
            footer: None,
            audience,
        }
    }

    /// Channel announcement for a newly recorded task.
    ///
    /// The footer carries the generated task id so it can be quoted later.
    pub fn task_added(task: &TaskRecord) -> Self {
        let mut fields = vec![
            Field::new("Name", task.name.as_str()),
            Field::new("Description", task.description.as_str()),
            Field::new("Assignees", MentionList(&task.assignees).to_string()),
        ];
        if let Some(due) = &task.due_date {
            fields.push(Field::new("Due date", due.to_string()));
        }

        Self {
            title: Some("Task added".to_string()),
            description: None,
            fields,
            footer: Some(format!("Task id: {}", task.id)),
            audience: Audience::Channel,
        }
    }

    /// Listing of open tasks, one block per task.
    ///
    /// When the page was truncated the footer says how many tasks exist in
    /// total.
    pub fn task_list(query: &TaskQuery, page: &TaskPage) -> Self {
        let title = match query.scope {
            QueryScope::Mine => format!("Tasks for {}", Mention(query.requester)),
            QueryScope::All => "All open tasks".to_string(),
        };

        let fields = page
            .tasks
            .iter()
            .map(|task| {
                let value = format!(
                    "- **Description**: {}\n- **Assignees**: {}\n- **Due**: {}\n- **Id**: `{}`",
                    task.description,
                    MentionList(&task.assignees),
                    DueDate(task.due_date.as_ref()),
                    task.id
                );
                Field::new(task.name.as_str(), value)
            })
            .collect();

        let footer = page.is_truncated().then(|| {
            format!(
                "{} open tasks. Showing the first {}.",
                page.total, SELECT_CEILING
            )
        });

        Self {
            title: Some(title),
            description: None,
            fields,
            footer,
            audience: Audience::Channel,
        }
    }

    /// Invoker-only notice for an empty listing.
    pub fn no_open_tasks(query: &TaskQuery) -> Self {
        let text = match query.scope {
            QueryScope::Mine => "You have no open tasks.",
            QueryScope::All => "No open tasks.",
        };
        Self::notice(text, Audience::Invoker)
    }

    /// Reply for a selection outcome.
    ///
    /// A completion is announced to the whole channel; the benign outcomes
    /// go back to the selecting user alone.
    pub fn for_selection(selection: &Selection, by: UserId) -> Self {
        match selection {
            Selection::Completed(task) => Self::task_completed(task, by),
            Selection::NotFound { id } => {
                Self::notice(format!("No task found for id `{id}`."), Audience::Invoker)
            }
            Selection::AlreadyComplete(task) => Self::notice(
                format!("Task \"{}\" is already complete.", task.name),
                Audience::Invoker,
            ),
            Selection::Inactive => Self::notice(
                "This selection prompt is no longer active.",
                Audience::Invoker,
            ),
        }
    }

    /// Channel announcement for a completed task.
    pub fn task_completed(task: &TaskRecord, by: UserId) -> Self {
        Self {
            title: Some("Task complete".to_string()),
            description: Some(format!("Task \"**{}**\" is now complete.", task.name)),
            fields: vec![Field::new(
                "Assignees",
                MentionList(&task.assignees).to_string(),
            )],
            footer: Some(format!("Completed by {}", Mention(by))),
            audience: Audience::Channel,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(title) = &self.title {
            writeln!(f, "# {title}")?;
            writeln!(f)?;
        }

        if let Some(description) = &self.description {
            writeln!(f, "{description}")?;
            if !self.fields.is_empty() || self.footer.is_some() {
                writeln!(f)?;
            }
        }

        // Single-line fields render as one metadata list; multi-line
        // values get their own block under a sub-header
        let mut in_run = false;
        for field in &self.fields {
            if field.value.contains('\n') {
                if in_run {
                    writeln!(f)?;
                    in_run = false;
                }
                writeln!(f, "## {}", field.name)?;
                writeln!(f)?;
                writeln!(f, "{}", field.value)?;
                writeln!(f)?;
            } else {
                writeln!(f, "- **{}**: {}", field.name, field.value)?;
                in_run = true;
            }
        }
        if in_run && self.footer.is_some() {
            writeln!(f)?;
        }

        if let Some(footer) = &self.footer {
            writeln!(f, "_{footer}_")?;
        }

        Ok(())
    }
}

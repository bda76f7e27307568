//! Core library for the Roster shared task list.
//!
//! This crate provides the core business logic for a small group's task
//! bot: the flat-file task store, the command handlers built on it, and the
//! time-limited completion prompt offered with every listing.
//!
//! # Display Architecture
//!
//! The crate separates what a reply contains from how it looks:
//!
//! - **Domain Models** ([`models`]): The task record and its supporting types
//! - **Structured Replies** ([`display`]): Handlers fill a [`Summary`]
//!   describing the reply
//! - **Terminal Rendering**: Rich markdown output via the CLI's terminal
//!   renderer
//!
//! This separation keeps the handlers surface-neutral: the same [`Summary`]
//! renders as markdown in a terminal today and could map onto a chat
//! platform's rich message type without touching business logic.
//!
//! # Quick Start
//!
//! ```rust
//! use roster_core::{models::UserId, params::AddTask, RosterBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a roster instance
//! let roster = RosterBuilder::new()
//!     .with_tasks_file(Some("tasks.json"))
//!     .build()
//!     .await?;
//!
//! // Record a task using roster methods
//! let create_params = AddTask {
//!     name: "Buy milk".to_string(),
//!     description: "Two liters".to_string(),
//!     assignees: Some("<@100> <@200>".to_string()),
//!     due_date: Some("2024-02-01".to_string()),
//!     added_by: UserId(42),
//! };
//!
//! let summary = roster.handle_add(&create_params).await?;
//! println!("{}", summary);
//!
//! // List open tasks and offer completion
//! use roster_core::params::{QueryScope, TaskQuery};
//! let query = TaskQuery {
//!     requester: UserId(100),
//!     scope: QueryScope::Mine,
//! };
//! let reply = roster.handle_check(&query).await?;
//! println!("{}", reply.summary);
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod prompt;
pub mod roster;
pub mod store;

// Re-export commonly used types
pub use display::{Audience, DueDate, Field, Mention, MentionList, Summary};
pub use error::{Result, RosterError};
pub use models::{
    Completion, TaskFilter, TaskPage, TaskRecord, TaskStatus, UserId, SELECT_CEILING,
};
pub use params::{AddTask, QueryScope, TaskQuery};
pub use prompt::{Candidate, PromptState, Selection, SelectionPrompt, DEFAULT_WINDOW};
pub use roster::{CheckReply, Roster, RosterBuilder};
pub use store::TaskStore;

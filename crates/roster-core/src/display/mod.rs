//! Display formatting functions and reply types.
//!
//! This module provides the reply type produced by command handlers together
//! with small formatting wrappers, enabling consistent output across
//! different surfaces (terminal today, a chat platform adapter tomorrow).
//!
//! # Architecture: Structured Replies
//!
//! Handlers describe what a reply contains; rendering decides how it looks.
//! The [`Summary`] type carries the structure, and its Display
//! implementation produces markdown for rich terminal output.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │    Summaries    │    │   Formatted     │
//! │  (TaskRecord)   │───▶│  & Formatters   │───▶│    Output       │
//! │                 │    │                 │    │   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`summary`]: The [`Summary`] reply type and its constructors
//! - [`users`]: Mention token formatting for user ids
//! - [`due`]: Due date formatting
//!
//! ## Usage Examples
//!
//! ```rust
//! use jiff::civil::date;
//! use roster_core::{
//!     display::Summary,
//!     models::{TaskRecord, UserId},
//! };
//!
//! let task = TaskRecord::new(
//!     "Buy milk",
//!     "Two liters",
//!     vec![UserId(100)],
//!     Some(date(2024, 2, 1)),
//!     UserId(42),
//! );
//!
//! let summary = Summary::task_added(&task);
//! let output = format!("{}", summary);
//! assert!(output.contains("# Task added"));
//! assert!(output.contains("- **Assignees**: <@100>"));
//! ```
//!
//! ## Design Principles
//!
//! 1. **Structure First**: Handlers fill a [`Summary`]; no surface-specific
//!    formatting leaks into business logic
//! 2. **Markdown Output**: The Display implementation produces markdown for
//!    rich terminal display
//! 3. **Mentions Stay Tokens**: People render as `<@id>`; resolving names
//!    is the hosting surface's job

pub mod due;
pub mod summary;
pub mod users;

// Re-export commonly used types for convenience
pub use due::DueDate;
pub use summary::{Audience, Field, Summary};
pub use users::{Mention, MentionList};

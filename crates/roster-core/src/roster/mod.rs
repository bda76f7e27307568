//! High-level roster API for managing a shared task list.
//!
//! This module provides the main [`Roster`] interface for interacting with the
//! group task system. The roster acts as the central coordinator between the
//! command layer and the task store, implementing all business logic for
//! creating, listing, and completing tasks.
//!
//! # Architecture Overview
//!
//! The roster module is organized into submodules that handle different
//! aspects of the task system:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │   Task Store    │
//! │   (handlers)    │───▶│   (task_ops)    │───▶│  (via store)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!  Command Replies        Business Logic        Flat-File Persistence
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Roster`] instances with configuration
//! - [`handlers`]: Command-level operations returning renderable summaries
//! - [`task_ops`]: Lower-level task operations against the store
//!
//! ## Design Principles
//!
//! 1. **Async First**: All operations are async-compatible; file access runs
//!    on blocking threads
//! 2. **Serialized Access**: A single gate orders every load/save cycle
//! 3. **Fresh Reads**: Each operation reloads the collection from disk, so
//!    results always reflect current state rather than a cached listing
//! 4. **Type Safety**: Strong typing for user ids, statuses, and parameters
//! 5. **Display Integration**: Results formatted via the display system
//!
//! # Usage Examples
//!
//! ## Creating a Roster
//!
//! ```rust
//! use roster_core::RosterBuilder;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create with the default tasks file location
//! let roster = RosterBuilder::new()
//!     .build()
//!     .await?;
//!
//! // Or specify a custom tasks file
//! let roster = RosterBuilder::new()
//!     .with_tasks_file(Some("/custom/path/tasks.json"))
//!     .build()
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Task Operations
//!
//! ```rust
//! use roster_core::{
//!     models::UserId,
//!     params::{AddTask, QueryScope, TaskQuery},
//!     RosterBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let roster = RosterBuilder::new().build().await?;
//!
//! // Record a task for two people
//! let params = AddTask {
//!     name: "Book the venue".to_string(),
//!     description: "Call before Friday".to_string(),
//!     assignees: Some("<@100> <@200>".to_string()),
//!     due_date: Some("2025-06-01".to_string()),
//!     added_by: UserId(42),
//! };
//! let task = roster.add_task(&params).await?;
//! println!("recorded {}", task.id);
//!
//! // List open tasks assigned to one of them
//! let query = TaskQuery {
//!     requester: UserId(100),
//!     scope: QueryScope::Mine,
//! };
//! let reply = roster.handle_check(&query).await?;
//! # Ok(())
//! # }
//! ```

use std::path::Path;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::store::TaskStore;

// Module declarations
pub mod builder;
pub mod handlers;
pub mod task_ops;


// Re-export the main types
pub use builder::RosterBuilder;
pub use handlers::CheckReply;

/// Main roster interface for managing the shared task list.
///
/// Clones share the same access gate, so every handle within one process
/// funnels file access through a single lock.
#[derive(Debug, Clone)]
pub struct Roster {
    pub(crate) store: TaskStore,
    pub(crate) gate: Arc<Mutex<()>>,
}

impl Roster {
    /// Creates a new roster over the given store.
    pub(crate) fn new(store: TaskStore) -> Self {
        Self {
            store,
            gate: Arc::new(Mutex::new(())),
        }
    }

    /// Path of the backing tasks file.
    pub fn tasks_file(&self) -> &Path {
        self.store.path()
    }
}

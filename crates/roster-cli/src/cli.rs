//! Command-line interface definitions using clap
//!
//! This module defines the complete CLI structure using clap's derive API,
//! implementing the parameter wrapper pattern for clean separation between
//! CLI framework concerns and core domain logic.
//!
//! ## Parameter Wrapper Pattern Implementation
//!
//! This module implements the CLI side of the parameter wrapper pattern:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Business Logic
//! ```
//!
//! ### Design Benefits
//!
//! 1. **Framework Isolation**: Core parameter types remain free of
//!    clap-specific attributes and derives, enabling reuse across different
//!    interfaces.
//!
//! 2. **Validation Separation**: Argument parsing and help generation are
//!    handled by clap derives, while business logic validation (mention
//!    extraction, due date parsing) remains in the core domain.
//!
//! 3. **Interface Evolution**: The CLI can evolve its argument structure
//!    (aliases, help text) without affecting core parameter definitions.
//!
//! The conversion methods perform explicit type mapping, attaching the
//! acting user where the core parameters need one.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use roster_core::{models::UserId, params::AddTask};

/// Main command-line interface for the roster task list
///
/// Roster keeps one shared list of tasks for a small group. Every command
/// acts as a user, identified by a numeric id, so assignments and
/// completions are attributed the same way a chat platform would attribute
/// them. Listings offer an interactive prompt for marking a task complete.
#[derive(Parser)]
#[command(version, about, name = "roster")]
pub struct Cli {
    /// Path to the tasks file. Defaults to
    /// $XDG_DATA_HOME/roster/tasks.json
    #[arg(long, global = true)]
    pub tasks_file: Option<PathBuf>,

    /// Numeric id of the acting user
    #[arg(long, global = true, env = "ROSTER_USER")]
    pub user: Option<u64>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print listings without offering the completion prompt
    #[arg(long, global = true)]
    pub no_input: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the roster CLI
///
/// Running without a command behaves like `check`.
#[derive(Subcommand)]
pub enum Commands {
    /// Record a new task
    #[command(alias = "a")]
    Add(AddTaskArgs),
    /// List your open tasks and offer completion
    #[command(alias = "c")]
    Check(CheckArgs),
    /// List everyone's open tasks and offer completion
    #[command(aliases = ["all", "ac"])]
    Allcheck(CheckArgs),
}

/// Record a new task
///
/// CLI wrapper for AddTask that adds clap-specific argument handling. The
/// raw assignee and due date strings are passed through untouched; the core
/// extracts mentions and validates the date so every interface rejects the
/// same inputs.
#[derive(Args)]
pub struct AddTaskArgs {
    /// Short name for the task
    pub name: String,
    /// What needs to be done
    pub description: String,
    /// Mentions of the responsible users
    #[arg(
        short,
        long,
        help = "Mentions of the responsible users, e.g. \"<@100> <@200>\"; defaults to you"
    )]
    pub assignees: Option<String>,
    /// Due date for the task
    #[arg(long, help = "Due date in YYYY-MM-DD form")]
    pub due: Option<String>,
}

impl AddTaskArgs {
    /// Convert CLI arguments to core parameters, acting as the given user.
    pub fn into_params(self, added_by: UserId) -> AddTask {
        AddTask {
            name: self.name,
            description: self.description,
            assignees: self.assignees,
            due_date: self.due,
            added_by,
        }
    }
}

/// List open tasks and offer completion
///
/// Shared by `check` and `allcheck`; the command picks the scope.
#[derive(Args, Default)]
pub struct CheckArgs {
    /// Seconds to keep the completion prompt open
    #[arg(long, help = "Seconds to keep the completion prompt open")]
    pub window: Option<u64>,
}

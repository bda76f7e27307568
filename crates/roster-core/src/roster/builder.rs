//! Builder for creating and configuring Roster instances.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use super::Roster;
use crate::{
    error::{PathResultExt, Result, RosterError},
    store::TaskStore,
};

/// Builder for creating and configuring Roster instances.
#[derive(Debug, Clone)]
pub struct RosterBuilder {
    tasks_file: Option<PathBuf>,
}

impl RosterBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self { tasks_file: None }
    }

    /// Sets a custom tasks file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/roster/tasks.json` or `~/.local/share/roster/tasks.json`
    pub fn with_tasks_file<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.tasks_file = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured roster instance.
    ///
    /// Missing parent directories are created so the first save does not
    /// fail. The tasks file itself is not touched until an operation runs.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::XdgDirectory` if no default data location is available
    /// Returns `RosterError::FileSystem` if the parent directory cannot be created
    pub async fn build(self) -> Result<Roster> {
        let tasks_file = if let Some(path) = self.tasks_file {
            path
        } else {
            Self::default_tasks_file()?
        };

        if let Some(parent) = tasks_file.parent() {
            let parent = parent.to_path_buf();
            task::spawn_blocking(move || {
                std::fs::create_dir_all(&parent).path_context(&parent)
            })
            .await
            .map_err(|e| RosterError::runtime(format!("Task join error: {e}")))??;
        }

        debug!("Using tasks file {}", tasks_file.display());
        Ok(Roster::new(TaskStore::new(tasks_file)))
    }

    /// Returns the default tasks file path following XDG Base Directory
    /// specification.
    fn default_tasks_file() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("roster")
            .place_data_file("tasks.json")
            .map_err(|e| RosterError::XdgDirectory(e.to_string()))
    }
}

impl Default for RosterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

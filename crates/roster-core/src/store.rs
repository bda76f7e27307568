//! Flat-file persistence for the task collection.
//!
//! The whole collection lives in one JSON array. There is no cache: callers
//! reload at the start of every operation and rewrite the full file after
//! every mutation, so the file itself is the single source of truth.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::{PathResultExt, Result};
use crate::models::TaskRecord;

/// Handle to the backing tasks file.
///
/// Cheap to clone; holds only the path. Reads recover to an empty collection;
/// writes surface their errors, since losing a mutation silently is the one
/// failure mode this store must not have.
#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    /// Creates a store handle for the given tasks file.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the full task collection.
    ///
    /// An absent file is a normal first run and yields an empty collection.
    /// An unreadable or malformed file also yields an empty collection, but
    /// logs a warning naming the path and cause, so data loss stays
    /// auditable without taking the tool down.
    pub fn load(&self) -> Result<Vec<TaskRecord>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!("No tasks file at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(err) => {
                warn!(
                    "Could not read tasks file {}: {err}; treating as empty",
                    self.path.display()
                );
                return Ok(Vec::new());
            }
        };

        match serde_json::from_str(&raw) {
            Ok(tasks) => Ok(tasks),
            Err(err) => {
                warn!(
                    "Tasks file {} is malformed: {err}; treating as empty",
                    self.path.display()
                );
                Ok(Vec::new())
            }
        }
    }

    /// Overwrites the backing file with the full collection.
    ///
    /// Serializes as pretty-printed JSON (2-space indent, stable key order,
    /// non-ASCII text unescaped). Errors are returned to the caller and are
    /// fatal to the invoking operation.
    pub fn save(&self, tasks: &[TaskRecord]) -> Result<()> {
        let raw = serde_json::to_string_pretty(tasks)?;
        fs::write(&self.path, raw).path_context(&self.path)
    }
}

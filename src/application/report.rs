//! # Weekly Log Writer
//!
//! Creates the markdown log for a week inside the logs directory, once.
//! An existing file is never opened for writing.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::domain::week::WeekId;
use crate::strings::logs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogOutcome {
    Created(PathBuf),
    AlreadyExists(PathBuf),
}

impl LogOutcome {
    pub fn path(&self) -> &Path {
        match self {
            LogOutcome::Created(path) | LogOutcome::AlreadyExists(path) => path,
        }
    }
}

/// Manages the weekly log files stored in a single directory.
#[derive(Debug, Clone)]
pub struct WeeklyLogManager {
    logs_dir: PathBuf,
}

impl WeeklyLogManager {
    pub fn new(logs_dir: impl Into<PathBuf>) -> Self {
        Self {
            logs_dir: logs_dir.into(),
        }
    }

    pub fn path_for(&self, week: &WeekId) -> PathBuf {
        self.logs_dir.join(week.file_name())
    }

    /// Writes `content` as the log for `week` unless a file with that name is already there.
    ///
    /// The existence check and the creation are a single `create_new` open, so of two
    /// concurrent runs only one writes.
    pub fn create_if_absent(&self, week: &WeekId, content: &str) -> Result<LogOutcome> {
        fs::create_dir_all(&self.logs_dir).with_context(|| {
            format!("Failed to create logs directory {}", self.logs_dir.display())
        })?;

        let path = self.path_for(week);
        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                tracing::info!("{}", logs::log_skipped(&path));
                return Ok(LogOutcome::AlreadyExists(path));
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to create {}", path.display()));
            }
        };

        file.write_all(content.as_bytes())
            .and_then(|_| file.flush())
            .with_context(|| format!("Failed to write {}", path.display()))?;

        tracing::info!("{}", logs::log_written(&path, content.len()));
        Ok(LogOutcome::Created(path))
    }
}

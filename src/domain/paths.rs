//! # Log Paths
//!
//! Single source of truth for where weekly logs are written.
//! By default the `Logs` directory sits one level above the directory holding the executable.

use std::path::{Path, PathBuf};

pub const LOGS_DIR: &str = "Logs";

/// Returns `<dir of exe>/../Logs`.
pub fn default_logs_dir(exe: &Path) -> PathBuf {
    let exe_dir = exe.parent().unwrap_or_else(|| Path::new("."));
    exe_dir.join("..").join(LOGS_DIR)
}

/// Picks the logs directory: command line first, then the config file, then the default.
pub fn resolve_logs_dir(cli: Option<&Path>, config: Option<&Path>, exe: &Path) -> PathBuf {
    cli.or(config)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_logs_dir(exe))
}

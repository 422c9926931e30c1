//! # Messages
//!
//! User-facing console output.

use std::path::Path;

pub fn log_created(path: &Path) -> String {
    format!("✅ Created: {}", path.display())
}

pub fn log_already_exists(path: &Path) -> String {
    format!("⚠️ File already exists: {}", path.display())
}

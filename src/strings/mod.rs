//! # Strings Module
//!
//! Centralizes user-facing strings, log lines, and the report template.

pub mod logs;
pub mod messages;
pub mod templates;

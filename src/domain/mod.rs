//! # Domain Layer
//!
//! Week identity, path rules and configuration types.
//! Free of I/O except for reading the config file.

pub mod config;
pub mod paths;
pub mod week;

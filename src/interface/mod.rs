//! # Interface Layer
//!
//! The command-line surface.

pub mod cli;

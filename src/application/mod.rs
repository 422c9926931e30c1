//! # Application Layer
//!
//! Writing weekly logs and wiring up diagnostics.

pub mod logging;
pub mod report;

//! # Main Entry Point
//!
//! Creates the weekly progress log for the current ISO week:
//! - Domain: week identity, paths, configuration
//! - Strings: report template and console messages
//! - Application: create-if-absent writer, logging setup
//! - Interface: command line
//!

mod application;
mod domain;
mod interface;
mod strings;

use anyhow::Result;
use clap::Parser;

use crate::interface::cli::{self, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    application::logging::init(args.verbose);

    let result = cli::run(&args)?;
    println!("{}", cli::describe(&result));
    Ok(())
}

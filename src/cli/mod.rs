//! Command-line interface module
//!
//! This module handles CLI argument parsing using Clap and the interactive session.

pub mod args;
pub mod interactive;

pub use args::{CheckArgs, Cli, SubCommand};
pub use interactive::InteractiveSession;

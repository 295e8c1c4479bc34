//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the vidnote binary.

pub mod assemble;
mod commands;
pub mod generate;

pub use commands::{Cli, Commands};

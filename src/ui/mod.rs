//! User interface and interaction
//!
//! This module contains command-line parsing.

pub mod cli;

// Re-export commonly used items
pub use cli::{Cli, cli_to_config};

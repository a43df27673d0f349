//! CLI layer: argument parsing, command dispatch and console presentation

pub mod args;
pub mod commands;
pub mod error;
pub mod menu;
pub mod output;
pub mod present;
pub mod tree_view;

pub use args::{Cli, Commands};
pub use error::{CliError, CliResult};

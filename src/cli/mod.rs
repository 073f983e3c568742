//! CLI module for array-utils
//!
//! - Argument parsing (`args`)
//! - Token to sample conversion (`input`)
//! - Runtime setup (`setup`)

pub mod args;
pub mod input;
pub mod setup;

pub use args::{Cli, Commands, OutputFormat};
pub use input::Sample;
pub use setup::{create_formatting_config, init_logging, log_level_for};

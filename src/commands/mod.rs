//! CLI command implementations.
//!
//! - **demo**: run every operation on the configured sample data
//! - **operations**: one handler per single-operation subcommand
//! - **init**: write a default `.array-utils.toml`
//!
//! Handlers return `anyhow::Result`; an `InvalidArgument` from `chunk`
//! surfaces here unchanged and ends the process with a non-zero status.

pub mod demo;
pub mod init;
pub mod operations;
pub mod output;

pub use demo::run_demo;
pub use init::{init_config, init_config_in};
pub use operations::{
    handle_average, handle_chunk, handle_dedup, handle_interleave, handle_max, handle_min,
    handle_most_frequent,
};
pub use output::{OperationRecord, OutputContext};

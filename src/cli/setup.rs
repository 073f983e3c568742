//! Setup and initialization functions for CLI
//!
//! Logging and output formatting are decided once at startup, before any
//! command runs.

use crate::formatting::{ColorMode, FormattingConfig};
use log::LevelFilter;

/// Map `-v` occurrences to a log level. Without flags only warnings show.
pub fn log_level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger. `RUST_LOG` still wins over `-v` when set.
pub fn init_logging(verbosity: u8) {
    let default_filter = log_level_for(verbosity).to_string();
    let result = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_filter),
    )
    .format_timestamp(None)
    .try_init();

    if let Err(e) = result {
        // Already installed - this is fine, just ignore
        eprintln!("Note: Logger already configured: {}", e);
    }
}

/// Combine `--plain`, the configured color mode and the environment
pub fn create_formatting_config(plain: bool, configured: ColorMode) -> FormattingConfig {
    if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env(configured)
    }
}

//! Configuration for the `array-utils` binary.
//!
//! The library operations take no configuration. This module only feeds
//! the CLI: sample data for `demo` and the preferred color mode, read from
//! `.array-utils.toml`.

mod core;
mod loader;

pub use self::core::{ArrayUtilsConfig, DemoConfig, OutputConfig};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME,
};

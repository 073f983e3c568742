use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::formatting::ColorMode;

/// Root configuration structure, read from `.array-utils.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ArrayUtilsConfig {
    /// Sample data for the `demo` command
    #[serde(default)]
    pub demo: DemoConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Sample data the demo runs every operation against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default = "default_numbers")]
    pub numbers: Vec<i64>,

    #[serde(default = "default_words")]
    pub words: Vec<String>,

    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            numbers: default_numbers(),
            words: default_words(),
            chunk_size: default_chunk_size(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,
}

fn default_numbers() -> Vec<i64> {
    vec![3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5]
}

fn default_words() -> Vec<String> {
    ["apple", "banana", "apple", "cherry", "banana"]
        .iter()
        .map(|w| w.to_string())
        .collect()
}

fn default_chunk_size() -> usize {
    3
}

impl ArrayUtilsConfig {
    /// Reject values the commands cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.demo.chunk_size == 0 {
            return Err(Error::config("demo.chunk_size must be greater than 0"));
        }
        Ok(())
    }
}

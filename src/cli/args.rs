//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "array-utils")]
#[command(about = "Sequence utilities: extremes, averages, dedup and chunking", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal", global = true)]
    pub format: OutputFormat,

    /// Configuration file (defaults to the nearest .array-utils.toml)
    #[arg(long, env = "ARRAY_UTILS_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Plain output: no colors, ASCII status markers
    #[arg(long, global = true)]
    pub plain: bool,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Run every operation on the configured sample data (default)
    Demo,

    /// Print the greatest value
    Max {
        /// Values, space or comma separated
        #[arg(value_delimiter = ',', allow_negative_numbers = true)]
        values: Vec<String>,
    },

    /// Print the least value
    Min {
        /// Values, space or comma separated
        #[arg(value_delimiter = ',', allow_negative_numbers = true)]
        values: Vec<String>,
    },

    /// Print the mean and median of numbers
    Average {
        /// Numbers, space or comma separated
        #[arg(value_delimiter = ',', allow_negative_numbers = true)]
        numbers: Vec<f64>,
    },

    /// Print the values with duplicates removed
    Dedup {
        /// Values, space or comma separated
        #[arg(value_delimiter = ',', allow_negative_numbers = true)]
        values: Vec<String>,
    },

    /// Print the most frequent value
    MostFrequent {
        /// Values, space or comma separated
        #[arg(value_delimiter = ',', allow_negative_numbers = true)]
        values: Vec<String>,
    },

    /// Split values into chunks of a fixed size
    Chunk {
        /// Chunk size (must be at least 1)
        #[arg(short, long, allow_negative_numbers = true)]
        size: i64,

        /// Values, space or comma separated
        #[arg(value_delimiter = ',', allow_negative_numbers = true)]
        values: Vec<String>,
    },

    /// Alternate the values of two lists
    Interleave {
        /// First list, comma separated
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        left: Vec<String>,

        /// Second list, comma separated
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        right: Vec<String>,
    },

    /// Write a default config to --config, or .array-utils.toml in the current directory
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_no_subcommand_defaults_to_none() {
        let cli = parse(&["array-utils"]);
        assert_eq!(cli.command, None);
        assert_eq!(cli.format, OutputFormat::Terminal);
    }

    #[test]
    fn test_values_accept_commas_and_spaces() {
        let cli = parse(&["array-utils", "max", "1,2", "3"]);
        assert_eq!(
            cli.command,
            Some(Commands::Max {
                values: vec!["1".into(), "2".into(), "3".into()]
            })
        );
    }

    #[test]
    fn test_chunk_accepts_negative_size() {
        let cli = parse(&["array-utils", "chunk", "--size", "-2", "1,2,3"]);
        match cli.command {
            Some(Commands::Chunk { size, values }) => {
                assert_eq!(size, -2);
                assert_eq!(values.len(), 3);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_average_rejects_non_numbers() {
        assert!(Cli::try_parse_from(["array-utils", "average", "1,x"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&["array-utils", "dedup", "a,a", "--format", "json", "-vv", "--plain"]);
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.verbosity, 2);
        assert!(cli.plain);
    }

    #[test]
    fn test_interleave_lists() {
        let cli = parse(&["array-utils", "interleave", "--left", "1,3", "--right", "2,4,6"]);
        assert_eq!(
            cli.command,
            Some(Commands::Interleave {
                left: vec!["1".into(), "3".into()],
                right: vec!["2".into(), "4".into(), "6".into()],
            })
        );
    }
}

use anyhow::Result;
use array_utils::cli::{create_formatting_config, init_logging, Cli, Commands};
use array_utils::commands::{self, OutputContext};
use array_utils::config::load_config;
use clap::Parser;

// Main orchestrator function
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    let command = cli.command.unwrap_or(Commands::Demo);

    // init must work even when an existing config is broken
    if let Commands::Init { force } = command {
        return commands::init_config(cli.config.as_deref(), force);
    }

    let config = load_config(cli.config.as_deref())?;
    let formatting = create_formatting_config(cli.plain, config.output.color);
    let ctx = OutputContext::new(cli.format, formatting);

    match command {
        Commands::Demo => commands::run_demo(&config.demo, &ctx),
        Commands::Max { values } => commands::handle_max(&values, &ctx),
        Commands::Min { values } => commands::handle_min(&values, &ctx),
        Commands::Average { numbers } => commands::handle_average(&numbers, &ctx),
        Commands::Dedup { values } => commands::handle_dedup(&values, &ctx),
        Commands::MostFrequent { values } => commands::handle_most_frequent(&values, &ctx),
        Commands::Chunk { size, values } => commands::handle_chunk(size, &values, &ctx),
        Commands::Interleave { left, right } => commands::handle_interleave(&left, &right, &ctx),
        Commands::Init { force } => commands::init_config(cli.config.as_deref(), force),
    }
}

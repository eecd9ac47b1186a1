use anyhow::Result;
use clap::Parser;
use ordo::cli::{Cli, Commands};
use ordo::commands;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            path,
            format,
            output,
            config,
        } => commands::handle_analyze(commands::AnalyzeConfig {
            path,
            format,
            output,
            config,
        }),
        Commands::Init { force } => commands::init_config(force),
    }
}

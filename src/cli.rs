use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored report on stdout
    Terminal,
    /// Pretty-printed JSON document
    Json,
    /// Markdown report
    Markdown,
    /// Plain-text report
    Text,
}

#[derive(Parser, Debug)]
#[command(name = "ordo")]
#[command(about = "Heuristic time and space complexity estimator for code snippets", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a source snippet and estimate its complexity
    Analyze {
        /// Path to the source file; reads stdin when omitted or "-"
        path: Option<PathBuf>,

        /// Output format (defaults to the config file's choice, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to searching for .ordo.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

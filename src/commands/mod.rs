//! CLI command implementations.
//!
//! - **analyze**: run the heuristic pipeline on a file or stdin and render
//!   the report in the requested format
//! - **init**: write a commented `.ordo.toml` configuration file

pub mod analyze;
pub mod init;

pub use analyze::{handle_analyze, AnalyzeConfig};
pub use init::init_config;

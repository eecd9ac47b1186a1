// Export modules for library usage
pub mod analyzer;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;

// Re-export commonly used types
pub use crate::core::{
    AnalysisReport, AnalysisResult, ComplexityClass, LineClassification, LineKind, PatternTag,
    SourceLine,
};

pub use crate::core::metrics::{count_kind, summarize_structure, StructureSummary};

pub use crate::analyzer::{analyze, Analyzer};

pub use crate::analyzer::patterns::PatternMatchers;

pub use crate::config::{load_config, parse_config, OrdoConfig};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};

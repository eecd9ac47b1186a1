use crate::analyzer::Analyzer;
use crate::cli;
use crate::config::{self, OrdoConfig};
use crate::core::AnalysisReport;
use crate::io::output::{self, OutputFormat};
use anyhow::{Context, Result};
use std::io::Read;
use std::path::{Path, PathBuf};

pub struct AnalyzeConfig {
    pub path: Option<PathBuf>,
    pub format: Option<cli::OutputFormat>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let settings = load_settings(config.config.as_deref())?;
    let (source, origin) = read_source(config.path.as_deref())?;

    let analyzer = Analyzer::new(&settings);
    let analysis = analyzer.analyze(&source);
    let report = AnalysisReport::new(origin, analysis);

    let format = resolve_format(config.format, &settings);
    let mut writer = output::create_writer(format, config.output.as_deref())?;
    writer.write_results(&report)
}

fn load_settings(explicit: Option<&Path>) -> Result<OrdoConfig> {
    match explicit {
        Some(path) => Ok(config::load_config_from(path)?),
        None => Ok(config::load_config()),
    }
}

// Stdin is the source when no path is given or the path is "-".
fn read_source(path: Option<&Path>) -> Result<(String, Option<PathBuf>)> {
    match path {
        Some(path) if path.as_os_str() != "-" => {
            let source = crate::io::read_file(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Ok((source, Some(path.to_path_buf())))
        }
        _ => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("failed to read from stdin")?;
            Ok((source, None))
        }
    }
}

// CLI flag wins; otherwise the config file's default; otherwise terminal.
fn resolve_format(flag: Option<cli::OutputFormat>, settings: &OrdoConfig) -> OutputFormat {
    match flag {
        Some(format) => to_output_format(format),
        None => parse_format_name(&settings.output.default_format).unwrap_or_else(|| {
            log::warn!(
                "unknown default_format {:?} in config; using terminal",
                settings.output.default_format
            );
            OutputFormat::Terminal
        }),
    }
}

fn to_output_format(format: cli::OutputFormat) -> OutputFormat {
    match format {
        cli::OutputFormat::Terminal => OutputFormat::Terminal,
        cli::OutputFormat::Json => OutputFormat::Json,
        cli::OutputFormat::Markdown => OutputFormat::Markdown,
        cli::OutputFormat::Text => OutputFormat::Text,
    }
}

fn parse_format_name(name: &str) -> Option<OutputFormat> {
    match name.to_lowercase().as_str() {
        "terminal" => Some(OutputFormat::Terminal),
        "json" => Some(OutputFormat::Json),
        "markdown" => Some(OutputFormat::Markdown),
        "text" => Some(OutputFormat::Text),
        _ => None,
    }
}

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Keyword lists driving the line predicates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeywordConfig {
    /// Loop-introducing keywords, matched when followed by `(`.
    #[serde(default = "default_loop_keywords")]
    pub loops: Vec<String>,

    /// Substrings treated as dynamic-allocation markers.
    #[serde(default = "default_allocation_keywords")]
    pub allocation: Vec<String>,

    /// Call names excluded from recursion detection.
    #[serde(default = "default_io_primitives")]
    pub io_primitives: Vec<String>,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            loops: default_loop_keywords(),
            allocation: default_allocation_keywords(),
            io_primitives: default_io_primitives(),
        }
    }
}

fn default_loop_keywords() -> Vec<String> {
    vec!["for".to_string(), "while".to_string(), "do".to_string()]
}

fn default_allocation_keywords() -> Vec<String> {
    ["new ", "malloc", "calloc", "realloc", "vector", "resize"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_io_primitives() -> Vec<String> {
    ["cout", "cin", "printf", "scanf"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Tuning for the confidence score attached to each result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfidenceConfig {
    /// Inputs with fewer classified lines than this are penalized.
    #[serde(default = "default_short_input_lines")]
    pub short_input_lines: usize,

    /// Multiplier applied for short inputs (0.0-1.0).
    #[serde(default = "default_short_input_factor")]
    pub short_input_factor: f64,

    /// Multiplier applied when no pattern tag was detected (0.0-1.0).
    #[serde(default = "default_no_pattern_factor")]
    pub no_pattern_factor: f64,
}

impl Default for ConfidenceConfig {
    fn default() -> Self {
        Self {
            short_input_lines: default_short_input_lines(),
            short_input_factor: default_short_input_factor(),
            no_pattern_factor: default_no_pattern_factor(),
        }
    }
}

impl ConfidenceConfig {
    fn is_valid_factor(factor: f64) -> bool {
        (0.0..=1.0).contains(&factor)
    }

    pub fn validate(&self) -> Result<(), String> {
        if !Self::is_valid_factor(self.short_input_factor) {
            return Err("short_input_factor must be between 0.0 and 1.0".to_string());
        }
        if !Self::is_valid_factor(self.no_pattern_factor) {
            return Err("no_pattern_factor must be between 0.0 and 1.0".to_string());
        }
        Ok(())
    }
}

fn default_short_input_lines() -> usize {
    5
}

fn default_short_input_factor() -> f64 {
    0.7
}

fn default_no_pattern_factor() -> f64 {
    0.8
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Format used when the CLI is given no `--format` flag.
    #[serde(default = "default_format")]
    pub default_format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: default_format(),
        }
    }
}

fn default_format() -> String {
    "terminal".to_string()
}

/// Root configuration, loaded from `.ordo.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OrdoConfig {
    #[serde(default)]
    pub keywords: KeywordConfig,
    #[serde(default)]
    pub confidence: ConfidenceConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse and validate config from a TOML string. Invalid confidence tuning
/// degrades to defaults with a warning rather than failing the load.
pub fn parse_config(contents: &str) -> Result<OrdoConfig, toml::de::Error> {
    let mut config = toml::from_str::<OrdoConfig>(contents)?;

    if let Err(e) = config.confidence.validate() {
        eprintln!("Warning: invalid confidence tuning: {}. Using defaults.", e);
        config.confidence = ConfidenceConfig::default();
    }

    Ok(config)
}

fn try_load_config_from_path(config_path: &Path) -> Option<OrdoConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            // Only log actual errors, not "file not found"
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("Failed to read config file {}: {}", config_path.display(), e);
            }
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            eprintln!(
                "Warning: failed to parse {}: {}. Using defaults.",
                config_path.display(),
                e
            );
            None
        }
    }
}

fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Load configuration from an explicitly named file. Unlike the implicit
/// search, failures here are hard errors.
pub fn load_config_from(path: &Path) -> Result<OrdoConfig, ConfigError> {
    let contents = read_config_file(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Search the directory hierarchy for `.ordo.toml`, falling back to defaults.
pub fn load_config() -> OrdoConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!("Failed to get current directory: {}. Using default config.", e);
            return OrdoConfig::default();
        }
    };

    directory_ancestors(current, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(".ordo.toml"))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            OrdoConfig::default()
        })
}

use crate::io;
use anyhow::Result;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(".ordo.toml");

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Ordo Configuration

[keywords]
# Loop-introducing keywords, matched when followed by "("
loops = ["for", "while", "do"]

# Substrings treated as dynamic-allocation markers
allocation = ["new ", "malloc", "calloc", "realloc", "vector", "resize"]

# Call names excluded from recursion detection
io_primitives = ["cout", "cin", "printf", "scanf"]

[confidence]
# Inputs with fewer classified lines than this are penalized
short_input_lines = 5
short_input_factor = 0.7
# Penalty applied when no structural pattern was detected
no_pattern_factor = 0.8

[output]
default_format = "terminal"
"#;

    io::write_file(&config_path, default_config)?;
    println!("Created .ordo.toml configuration file");

    Ok(())
}

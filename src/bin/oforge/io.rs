use std::fs;
use std::io::{self, IsTerminal};
use std::path::Path;

use anyhow::{Context, Result};
use orbital_forge::{EngineConfig, load_config};

/// Returns `true` if stderr is a terminal (interactive).
pub fn stderr_is_tty() -> bool {
    io::stderr().is_terminal()
}

/// Reads the engine configuration file, or falls back to the embedded defaults.
pub fn read_engine_config(path: Option<&Path>) -> Result<EngineConfig> {
    let Some(path) = path else {
        return Ok(load_config(None)?);
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    load_config(Some(&text))
        .with_context(|| format!("Invalid configuration file: {}", path.display()))
}

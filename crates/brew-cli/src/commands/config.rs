//! `brew config init` — scaffold a brew.toml.

use std::path::Path;

use anyhow::{Context, Result, bail};
use brew_core::BrewConfig;

pub fn init(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("{} already exists", path.display());
    }
    let content = BrewConfig::scaffold().to_toml_string()?;
    std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
    println!("✓ Generated {}", path.display());
    Ok(())
}

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// `~/.spendprint`, unless SPENDPRINT_HOME points elsewhere
pub fn spendprint_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("SPENDPRINT_HOME") {
        return Ok(PathBuf::from(dir));
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".spendprint"))
}

pub fn ensure_spendprint_home() -> Result<PathBuf> {
    let dir = spendprint_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

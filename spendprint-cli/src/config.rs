use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use spendprint_ingest::TierRules;
use std::fs;
use std::path::{Path, PathBuf};

use crate::state::ensure_spendprint_home;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub profile: ProfileSection,
    #[serde(default)]
    pub tiers: TierRules,
}

/// Figures the user would otherwise pass on every `analyze` run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileSection {
    pub income: f64,
    pub goal_amount: f64,
    pub months_remaining: f64,
    pub planned_discretionary: f64,
    /// IANA timezone used to date timestamped statement rows
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_timezone() -> String {
    "America/Chicago".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profile: ProfileSection {
                income: 50000.0,
                goal_amount: 5000.0,
                months_remaining: 12.0,
                planned_discretionary: 10000.0,
                timezone: default_timezone(),
            },
            tiers: TierRules::starter(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_spendprint_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    load_config_from(&config_path()?)
}

/// Read a config file, falling back to defaults when it does not exist
pub fn load_config_from(p: &Path) -> Result<Config> {
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn save_config_to(cfg: &Config, p: &Path) -> Result<()> {
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config_to(&Config::default(), &p)?;
    println!("Wrote {}", p.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("config.toml");
        let mut cfg = Config::default();
        cfg.profile.income = 72000.0;
        cfg.tiers.luxury.push("Golf".to_string());
        save_config_to(&cfg, &p).unwrap();

        assert_eq!(load_config_from(&p).unwrap(), cfg);
    }

    #[test]
    fn test_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("config.toml");
        fs::write(
            &p,
            r#"
[profile]
income = 3000.0
goal_amount = 600.0
months_remaining = 3.0
planned_discretionary = 500.0

[tiers]
secondary = ["Dining"]
"#,
        )
        .unwrap();

        let cfg = load_config_from(&p).unwrap();
        assert_eq!(cfg.profile.timezone, "America/Chicago");
        assert_eq!(cfg.tiers.secondary, vec!["Dining".to_string()]);
        assert!(cfg.tiers.essential.is_empty());
    }

    #[test]
    fn test_invalid_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("config.toml");
        fs::write(&p, "profile = 3").unwrap();
        let err = load_config_from(&p).unwrap_err();
        assert!(err.to_string().contains("config.toml"));
    }
}

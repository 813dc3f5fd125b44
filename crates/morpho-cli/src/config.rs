//! Configuration management for the Morpho CLI.

use anyhow::{Context, Result};
use morpho::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "morpho.toml";

/// Morpho project configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub alphabet: Alphabet,
    #[serde(default)]
    pub growth: GrowthConfig,
    #[serde(default)]
    pub evolution: EvolutionConfig,
    #[serde(default)]
    pub run: RunConfig,
}

/// Defaults of the `evolve` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default = "default_generations")]
    pub generations: u64,
    /// History files are named `<prefix><timestamp>` unless given.
    #[serde(default = "default_history_prefix")]
    pub history_prefix: String,
}

fn default_generations() -> u64 { 2000 }
fn default_history_prefix() -> String { "genesis".to_string() }

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            generations: default_generations(),
            history_prefix: default_history_prefix(),
        }
    }
}

impl Config {
    /// Load config from morpho.toml in the current or parent directories.
    pub fn load() -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to read current directory")?;
        match find_config_file(&cwd) {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Save config to the specified path.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_toml()?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Alphabet and growth constants, validated.
    pub fn morphogenesis(&self) -> Result<Morphogenesis> {
        Morphogenesis::new(self.alphabet.clone(), self.growth.clone())
            .context("Invalid [alphabet] or [growth] configuration")
    }
}

/// Find morpho.toml in `start` or its parent directories.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    loop {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

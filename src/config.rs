use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::settings::Settings;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub settings: Settings,
    #[serde(default)]
    pub app: RunConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RunConfig {
    /// Simulated backend latency before a batch is generated
    #[serde(default = "default_generation_delay_ms")]
    pub generation_delay_ms: u64,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            generation_delay_ms: default_generation_delay_ms(),
            seed: None,
            output_dir: None,
        }
    }
}

fn default_generation_delay_ms() -> u64 {
    2000
}

impl RunConfig {
    pub fn generation_delay(&self) -> Duration {
        Duration::from_millis(self.generation_delay_ms)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            app: RunConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(content).context("Failed to parse TOML config")?;
        Ok(config)
    }
}

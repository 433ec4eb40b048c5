use std::time::Duration;

use anyhow::{Result, bail};
use chrono::Utc;
use rand::rngs::StdRng;
use tracing::{error, info};

use crate::config::AppConfig;
use crate::export::{ExportFormat, export_file_name};
use crate::models::{ResultItem, ResultUpdate};
use crate::random;
use crate::results::ResultSet;
use crate::settings::Settings;
use crate::traits::ExportTarget;

/// Ties settings, the random source and the current results together.
pub struct MetadataStudio {
    settings: Settings,
    rng: StdRng,
    results: ResultSet,
    generation_delay: Duration,
}

impl MetadataStudio {
    pub fn new(settings: Settings, rng: StdRng, generation_delay: Duration) -> Self {
        Self {
            settings,
            rng,
            results: ResultSet::new(),
            generation_delay,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.settings.clone(),
            random::from_optional_seed(config.app.seed),
            config.app.generation_delay(),
        )
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Takes effect on the next generate or regenerate call
    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    /// Generate results for `filenames`, replacing the current ones.
    ///
    /// Waits for the configured delay first to mimic a remote call. Returns the
    /// number of results; an empty list leaves the current results alone.
    pub async fn generate<S: AsRef<str>>(&mut self, filenames: &[S]) -> Result<usize> {
        if filenames.is_empty() {
            info!("No files to generate metadata for");
            return Ok(0);
        }

        info!("Generating metadata for {} files", filenames.len());
        if !self.generation_delay.is_zero() {
            tokio::time::sleep(self.generation_delay).await;
        }

        Ok(self.results.populate(filenames, &self.settings, &mut self.rng))
    }

    pub fn regenerate(&mut self, id: &str) -> Result<&ResultItem> {
        self.results.regenerate(id, &self.settings, &mut self.rng)
    }

    pub fn update(&mut self, id: &str, update: ResultUpdate) -> Result<&ResultItem> {
        self.results.update(id, update)
    }

    pub fn remove(&mut self, id: &str) -> Result<ResultItem> {
        self.results.remove(id)
    }

    /// Render the current results and deliver them to `target`
    ///
    /// # Returns
    /// * `Result<String>` - Location reported by the target
    pub async fn export(&self, format: ExportFormat, target: &dyn ExportTarget) -> Result<String> {
        if self.results.is_empty() {
            bail!("No results to export");
        }

        let content = format.render(self.results.items())?;
        let file_name = export_file_name(format, Utc::now());

        match target.deliver(&file_name, &content).await {
            Ok(location) => {
                info!(
                    "{} export of {} results sent to {} ({})",
                    format,
                    self.results.len(),
                    target.name(),
                    location
                );
                Ok(location)
            }
            Err(e) => {
                error!("{} export to {} failed: {}", format, target.name(), e);
                Err(e)
            }
        }
    }
}

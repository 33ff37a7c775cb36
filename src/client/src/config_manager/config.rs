use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use url::Url;

use config::Config as RConfig;
use oracle_common::constants::{
    DEFAULT_INGEST_ENDPOINT, DEFAULT_LOG_LEVEL, REQUEST_TIMEOUT_MS, SAMPLE_INTERVAL_MS,
};

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Config {
    pub ingest_endpoint: String,
    pub sample_interval_ms: u64,
    pub request_timeout_ms: u64,
    pub log_level: String,
}

impl Config {
    pub fn sample_interval(&self) -> Duration {
        Duration::from_millis(self.sample_interval_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.ingest_endpoint)
            .with_context(|| format!("Invalid ingest endpoint '{}'", self.ingest_endpoint))?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!(
                "Ingest endpoint must be http or https, got '{}'",
                url.scheme()
            );
        }
        if self.sample_interval_ms == 0 {
            bail!("Sample interval must be greater than zero");
        }
        if self.request_timeout_ms == 0 {
            bail!("Request timeout must be greater than zero");
        }
        Ok(())
    }
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Everything is compiled in: only defaults are registered, no file or environment source.
    pub fn load_default_config() -> Result<Config> {
        let builder = RConfig::builder()
            .set_default("ingest_endpoint", DEFAULT_INGEST_ENDPOINT)?
            .set_default("sample_interval_ms", SAMPLE_INTERVAL_MS)?
            .set_default("request_timeout_ms", REQUEST_TIMEOUT_MS)?
            .set_default("log_level", DEFAULT_LOG_LEVEL)?;

        let config: Config = builder
            .build()?
            .try_deserialize()
            .context("failed to build default config")?;

        config.validate()?;
        Ok(config)
    }
}

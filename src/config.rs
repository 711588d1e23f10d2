use std::str::FromStr;

use anyhow::{Context, Result};
use rocket::figment::Figment;
use serde::Deserialize;
use tracing::Level;

/// Application settings read from the same figment Rocket uses for its own
/// `address` and `port`, so `Rocket.toml` and `ROCKET_*` env vars apply.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default = "default_tracing_level")]
    pub tracing_level: String,
    /// Seconds a browser may cache a preflight response.
    #[serde(default)]
    pub cors_max_age: Option<usize>,
}

fn default_tracing_level() -> String {
    "info".to_string()
}

impl Config {
    pub fn from_figment(figment: &Figment) -> Result<Self> {
        let config = figment.extract::<Config>().context("invalid config")?;
        config.max_level()?;
        Ok(config)
    }

    pub fn max_level(&self) -> Result<Level> {
        Level::from_str(&self.tracing_level)
            .with_context(|| format!("invalid tracing_level {:?}", self.tracing_level))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tracing_level: default_tracing_level(),
            cors_max_age: None,
        }
    }
}

use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use catalog_core::ViewSettings;
use catalog_engine::FetchSettings;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::logging::LogDestination;

pub const CONFIG_FILENAME: &str = "catalog.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read catalog.ron: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse catalog.ron: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("invalid value for {field}: {message}")]
    Invalid { field: &'static str, message: String },
}

/// Optional overrides read from `catalog.ron`. Missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub page_size: u32,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub log_destination: LogDestination,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let fetch = FetchSettings::default();
        Self {
            base_url: fetch.base_url,
            page_size: ViewSettings::default().page_size,
            connect_timeout_secs: fetch.connect_timeout.as_secs(),
            request_timeout_secs: fetch.request_timeout.as_secs(),
            log_destination: LogDestination::default(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            base_url: self.base_url.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            ..FetchSettings::default()
        }
    }

    pub fn view_settings(&self) -> ViewSettings {
        ViewSettings {
            page_size: self.page_size,
        }
    }

    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Info)
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Invalid {
                field: "page_size",
                message: "must be positive".to_string(),
            });
        }
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "base_url",
                message: "must not be empty".to_string(),
            });
        }
        if LevelFilter::from_str(&self.log_level).is_err() {
            return Err(ConfigError::Invalid {
                field: "log_level",
                message: format!("unknown level {:?}", self.log_level),
            });
        }
        Ok(self)
    }
}

pub fn parse_config(text: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = ron::from_str(text)?;
    config.validate()
}

/// Reads `{dir}/catalog.ron`; a missing file yields the defaults.
pub fn load_config(dir: &Path) -> Result<AppConfig, ConfigError> {
    let path = dir.join(CONFIG_FILENAME);
    match fs::read_to_string(&path) {
        Ok(text) => parse_config(&text),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(err) => Err(err.into()),
    }
}

use std::{fs, io::ErrorKind, path::Path, path::PathBuf, time::Duration};

use directories::ProjectDirs;
use serde::Deserialize;

use crate::error::ConfigError;

pub const QUALIFIER: &str = "com";
pub const ORGANIZATION: &str = "storefront";
pub const APPLICATION: &str = "suggest";

pub const ENDPOINT_ENV: &str = "SUGGEST_ENDPOINT";
pub const DEFAULT_ENDPOINT: &str = "https://dummyjson.com/products/search";

pub fn config_root() -> Option<PathBuf> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION).map(|p| p.config_dir().to_path_buf())
}

pub fn data_root() -> Option<PathBuf> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION).map(|p| p.data_dir().to_path_buf())
}

pub fn settings_path() -> Option<PathBuf> {
    config_root().map(|dir| dir.join("config.toml"))
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub endpoint: String,
    pub debounce_ms: u64,
    pub max_results: usize,
    pub request_timeout_secs: u64,
    /// Serve only the bundled dataset, never touching the network.
    pub offline: bool,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            debounce_ms: 500,
            max_results: 10,
            request_timeout_secs: 10,
            offline: false,
            log_filter: "info".to_string(),
        }
    }
}

impl Settings {
    /// Load from the platform config directory; a missing file yields defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = match settings_path() {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };
        settings.apply_env_override(std::env::var(ENDPOINT_ENV).ok());
        Ok(settings)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(contents)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid("endpoint must not be empty".into()));
        }
        if self.max_results == 0 {
            return Err(ConfigError::Invalid("max_results must be at least 1".into()));
        }
        Ok(())
    }

    pub fn apply_env_override(&mut self, endpoint: Option<String>) {
        if let Some(url) = endpoint.map(|s| s.trim().to_string()) {
            if !url.is_empty() {
                self.endpoint = url;
            }
        }
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

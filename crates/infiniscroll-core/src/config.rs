use crate::{ScrollError, ScrollResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_QUOTES_BASE_URL: &str = "https://api.quotable.io";
pub const DEFAULT_PATIENTS_BASE_URL: &str = "http://localhost:5000";

/// Which remote collection the list pages through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Quotes,
    Patients,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub source: SourceKind,
    #[serde(default)]
    pub quotes_base_url: Option<String>,
    #[serde(default)]
    pub patients_base_url: Option<String>,
    #[serde(default)]
    pub clinic_id: Option<u32>,
    #[serde(default)]
    pub state_id: Option<u32>,
    #[serde(default)]
    pub country_id: Option<u32>,
    #[serde(default)]
    pub token: Option<String>,
    /// Extra rows of lookahead before the end of loaded data triggers a fetch.
    #[serde(default)]
    pub prefetch_distance: Option<usize>,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/infiniscroll/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("infiniscroll/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("infiniscroll\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Loads the user config file, falling back to defaults when it is
    /// missing or unreadable.
    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                match Self::load_from(&config_path) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Ignoring config {}: {}", config_path.display(), e);
                    }
                }
            }
        }
        Self::default()
    }

    pub fn load_from(path: &Path) -> ScrollResult<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| ScrollError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn effective_quotes_base_url(&self) -> &str {
        self.quotes_base_url
            .as_deref()
            .unwrap_or(DEFAULT_QUOTES_BASE_URL)
    }

    pub fn effective_patients_base_url(&self) -> &str {
        self.patients_base_url
            .as_deref()
            .unwrap_or(DEFAULT_PATIENTS_BASE_URL)
    }

    pub fn effective_prefetch_distance(&self) -> usize {
        self.prefetch_distance.unwrap_or(0)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

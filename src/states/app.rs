//! Application State
//!
//! Persisted application settings: locale and backend connection.

use crate::constants::{API_URL_ENV, CONFIG_FILE_NAME};
use crate::domain::ApiConfig;
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;
use crate::i18n::Locale;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{error, info};

fn get_config_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    let path = config_dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        std::fs::write(&path, "")?;
    }
    Ok(path)
}

/// Persisted application state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    locale: Option<String>,
    #[serde(default)]
    api: ApiConfig,
}

impl AppState {
    /// Load state from the config file in the platform config directory
    pub fn try_load() -> Result<Self> {
        let path = get_config_path()?;
        let mut state = Self::load_from(&path)?;
        state.apply_env_override(std::env::var(API_URL_ENV).ok());
        Ok(state)
    }

    /// Load state from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        info!(path = ?path, "Loading config file");
        let value = std::fs::read_to_string(path)?;

        let mut state: Self = if value.trim().is_empty() {
            Self::new()
        } else {
            toml::from_str(&value).map_err(|e| {
                error!(error = %e, path = ?path, "Failed to parse config file");
                e
            })?
        };

        // Detect system locale if not set
        if state.locale.as_ref().is_none_or(|l| l.is_empty()) {
            let current = locale_config::Locale::current().to_string();
            let lang = current.split_once('-').map_or(current.as_str(), |(lang, _)| lang);
            if !lang.is_empty() {
                state.locale = Some(lang.to_string());
            }
        }

        Ok(state)
    }

    /// Save state back to the config file
    pub fn save(&self) -> Result<()> {
        let path = get_config_path()?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!(path = ?path, "Config saved");
        Ok(())
    }

    /// Create new default state
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the backend base URL with an override, if one is set
    pub fn apply_env_override(&mut self, base_url: Option<String>) {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            info!(url = %url, "Backend URL overridden from environment");
            self.api.base_url = url;
        }
    }

    // ==================== Getters ====================

    pub fn locale(&self) -> Locale {
        Locale::from_tag(self.locale.as_deref().unwrap_or("en"))
    }

    pub fn api(&self) -> &ApiConfig {
        &self.api
    }

    // ==================== Setters ====================

    pub fn set_locale(&mut self, locale: String) {
        self.locale = Some(locale);
    }

    pub fn set_api(&mut self, api: ApiConfig) {
        self.api = api;
    }
}

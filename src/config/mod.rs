// Config module - TOML files under the user config dir, defaults when missing

mod theme;

pub use theme::Theme;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use directories::BaseDirs;

use crate::error::{GoodsError, Result};

pub const APP_DIR: &str = "goods-form";
const MAIN_CONFIG_FILE: &str = "config.toml";
const THEME_FILE: &str = "theme.toml";
const LOG_FILE: &str = "goods-form.log";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[derive(Default)]
#[serde(default)]
pub struct AppConfig {
    pub general: GeneralConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub tick_interval_ms: u64,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
    /// Built-in theme used when theme.toml is absent
    pub theme: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 250,
            log_level: "info".to_string(),
            log_file: None,
            theme: "default".to_string(),
        }
    }
}

pub struct ConfigManager {
    config_dir: PathBuf,
    app_config: AppConfig,
    theme: Theme,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        let config_dir = Self::get_config_dir()?;
        Ok(Self::load_from(config_dir))
    }

    /// Load from a directory the user named explicitly; it must exist.
    pub fn from_existing_dir(config_dir: PathBuf) -> Result<Self> {
        if !config_dir.is_dir() {
            return Err(GoodsError::ConfigNotFound { path: config_dir });
        }
        Ok(Self::load_from(config_dir))
    }

    /// Load from `config_dir` instead of the platform default.
    pub fn load_from(config_dir: PathBuf) -> Self {
        let app_config = Self::load_app_config(&config_dir);
        let theme = Self::load_theme(&config_dir, &app_config.general.theme);

        Self {
            config_dir,
            app_config,
            theme,
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn app_config(&self) -> &AppConfig {
        &self.app_config
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Log file from config, else `<data dir>/goods-form/goods-form.log`.
    pub fn log_file(&self) -> Result<PathBuf> {
        if let Some(ref path) = self.app_config.general.log_file {
            return Ok(path.clone());
        }
        BaseDirs::new()
            .map(|dirs| dirs.data_local_dir().join(APP_DIR).join(LOG_FILE))
            .ok_or_else(|| GoodsError::Config("Could not determine data directory".to_string()))
    }

    fn get_config_dir() -> Result<PathBuf> {
        BaseDirs::new()
            .map(|dirs| dirs.config_dir().join(APP_DIR))
            .ok_or_else(|| GoodsError::Config("Could not determine config directory".to_string()))
    }

    fn load_app_config(config_dir: &Path) -> AppConfig {
        let path = config_dir.join(MAIN_CONFIG_FILE);
        Self::load_toml_file(&path).unwrap_or_default()
    }

    fn load_theme(config_dir: &Path, preset: &str) -> Theme {
        let path = config_dir.join(THEME_FILE);
        Self::load_toml_file(&path).unwrap_or_else(|| Theme::preset(preset))
    }

    fn load_toml_file<T: for<'de> Deserialize<'de> + Default>(path: &Path) -> Option<T> {
        if !path.exists() {
            return None;
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => Some(config),
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}", path.display(), e);
                    None
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", path.display(), e);
                None
            }
        }
    }

    pub fn ensure_config_dir(&self) -> Result<()> {
        if !self.config_dir.exists() {
            std::fs::create_dir_all(&self.config_dir)
                .map_err(|e| GoodsError::Config(format!("Failed to create config dir: {}", e)))?;
        }
        Ok(())
    }

    /// Write default `config.toml` and `theme.toml`, leaving existing files alone.
    pub fn write_default_configs(&self) -> Result<()> {
        self.ensure_config_dir()?;

        let main_path = self.config_dir.join(MAIN_CONFIG_FILE);
        if !main_path.exists() {
            let content = toml::to_string_pretty(&AppConfig::default())
                .map_err(|e| GoodsError::Config(format!("Failed to serialize config: {}", e)))?;
            std::fs::write(&main_path, content)
                .map_err(|e| GoodsError::Config(format!("Failed to write config: {}", e)))?;
        }

        let theme_path = self.config_dir.join(THEME_FILE);
        if !theme_path.exists() {
            let content = toml::to_string_pretty(&Theme::default())
                .map_err(|e| GoodsError::Config(format!("Failed to serialize theme: {}", e)))?;
            std::fs::write(&theme_path, content)
                .map_err(|e| GoodsError::Config(format!("Failed to write theme: {}", e)))?;
        }

        Ok(())
    }
}

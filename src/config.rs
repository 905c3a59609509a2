//! Configuration management for studyflow
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{BACKEND_MAX_LATENCY_MS, CONFIG_GENERATED};
use crate::icons::IconTheme;
use crate::ui::core::actions::Route;
use crate::utils::datetime;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
    pub backend: BackendConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Page to open on startup
    /// Options: "tasks", "calendar", "analytics", "about", "contact" (or their paths)
    pub default_route: String,
    /// Icon theme: "emoji", "unicode" or "ascii"
    pub icon_theme: IconTheme,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// chrono format used for absolute deadlines in the task list
    pub deadline_format: String,
    /// Show relative deadlines ("tomorrow at 09:00") instead of absolute ones
    pub relative_deadlines: bool,
    /// Show task tags
    pub show_tags: bool,
    /// Show estimated time
    pub show_estimates: bool,
    /// Show task descriptions in list view
    pub show_descriptions: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write logs to a file in the user data directory
    pub enabled: bool,
    /// Minimum level: "error", "warn", "info", "debug" or "trace"
    pub level: String,
}

/// Settings for the in-memory task sink
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BackendConfig {
    /// Artificial delay applied to every submission, in milliseconds
    pub latency_ms: u64,
    /// Reject every submission (exercises the failure path)
    pub fail_submissions: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_route: "tasks".to_string(),
            icon_theme: IconTheme::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            deadline_format: format!("{} %H:%M", datetime::DATE_FORMAT),
            relative_deadlines: true,
            show_tags: true,
            show_estimates: true,
            show_descriptions: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("studyflow.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Ok(xdg_config) = Self::get_default_config_path() {
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Err(e) = Route::from_str(&self.ui.default_route) {
            anyhow::bail!("Invalid default_route: {}", e);
        }

        if self.display.deadline_format.trim().is_empty() {
            anyhow::bail!("deadline_format cannot be empty");
        }
        // chrono only reports bad specifiers while formatting
        let probe = chrono::NaiveDate::from_ymd_opt(2025, 1, 1).and_then(|d| d.and_hms_opt(12, 0, 0));
        if let Some(probe) = probe {
            use std::fmt::Write;
            let mut out = String::new();
            if write!(out, "{}", probe.format(&self.display.deadline_format)).is_err() {
                anyhow::bail!("Invalid deadline_format '{}'", self.display.deadline_format);
            }
        }

        if log::LevelFilter::from_str(&self.logging.level).is_err() {
            anyhow::bail!(
                "Invalid logging level '{}': expected one of error, warn, info, debug, trace, off",
                self.logging.level
            );
        }

        if self.backend.latency_ms > BACKEND_MAX_LATENCY_MS {
            anyhow::bail!(
                "latency_ms cannot exceed {} ({} given)",
                BACKEND_MAX_LATENCY_MS,
                self.backend.latency_ms
            );
        }

        Ok(())
    }

    /// The startup route. Falls back to the task page for unknown values.
    pub fn default_route(&self) -> Route {
        Route::from_str(&self.ui.default_route).unwrap_or_default()
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# studyflow Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format(datetime::DATE_FORMAT)
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("studyflow"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}

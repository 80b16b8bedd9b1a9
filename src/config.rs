//! Configuration management for Vitae
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_GENERATED, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS, ENV_API_URL, MAX_TIMEOUT_SECS,
    REVEAL_DEFAULT_DURATION_MS, REVEAL_DEFAULT_OFFSET, REVEAL_MAX_DURATION_MS,
};
use crate::icons::IconTheme;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Tabs that may be opened on startup
pub const VALID_TABS: [&str; 5] = ["profile", "experience", "skills", "projects", "contact"];

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub ui: UiConfig,
    pub animation: AnimationConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// Which data source backs the resume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// REST service at `base_url`
    #[default]
    Http,
    /// A local JSON document holding every collection
    Fixture,
}

/// Resume service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the resume REST service, without a trailing slash
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Backend type: "http" or "fixture"
    pub backend: BackendKind,
    /// JSON document used by the fixture backend
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixture_path: Option<PathBuf>,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Tab opened on startup
    /// Options: "profile", "experience", "skills", "projects", "contact"
    pub default_tab: String,
    /// Ring the terminal bell on selections
    pub haptics: bool,
}

/// Entrance animation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Disable to render every screen in its settled state
    pub enabled: bool,
    /// Reveal duration in milliseconds
    pub duration_ms: u64,
    /// Reveal displacement in logical units
    pub offset_units: f32,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DisplayConfig {
    /// Icon theme: "emoji", "unicode" or "ascii"
    pub icon_theme: IconTheme,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to file
    pub enabled: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            backend: BackendKind::Http,
            fixture_path: None,
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_tab: "profile".to_string(),
            haptics: true,
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            duration_ms: REVEAL_DEFAULT_DURATION_MS,
            offset_units: REVEAL_DEFAULT_OFFSET,
        }
    }
}

impl Config {
    /// Load `explicit`, or the first file found in the default locations, or
    /// the defaults, then apply environment overrides.
    ///
    /// Nothing is validated here: command-line overrides may still replace
    /// the backend, so callers run `validate` once every layer is applied.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let config_path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => Self::find_config_file()?,
        };

        let mut config = if let Some(path) = config_path {
            Self::load_from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a specific file, without validating it
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))
    }

    /// `VITAE_API_URL` replaces the configured base URL when set and non-empty
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(ENV_API_URL) {
            if !url.trim().is_empty() {
                self.api.base_url = url.trim().to_string();
            }
        }
    }

    /// Command-line overrides. A fixture path wins over an API URL.
    pub fn apply_overrides(&mut self, api_url: Option<String>, fixture: Option<PathBuf>) {
        if let Some(url) = api_url {
            self.api.base_url = url.trim().to_string();
            self.api.backend = BackendKind::Http;
        }
        if let Some(path) = fixture {
            self.api.fixture_path = Some(path);
            self.api.backend = BackendKind::Fixture;
        }
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("vitae.toml");
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
        self.validate_api()?;

        if !VALID_TABS.contains(&self.ui.default_tab.as_str()) {
            anyhow::bail!(
                "default_tab '{}' is not a tab. Available tabs: {}",
                self.ui.default_tab,
                VALID_TABS.join(", ")
            );
        }

        if self.animation.duration_ms == 0 || self.animation.duration_ms > REVEAL_MAX_DURATION_MS {
            anyhow::bail!(
                "duration_ms must be between 1 and {} milliseconds, got {}",
                REVEAL_MAX_DURATION_MS,
                self.animation.duration_ms
            );
        }

        if !self.animation.offset_units.is_finite() || self.animation.offset_units < 0.0 {
            anyhow::bail!("offset_units must be a non-negative number, got {}", self.animation.offset_units);
        }

        Ok(())
    }

    fn validate_api(&self) -> Result<()> {
        if self.api.timeout_secs == 0 || self.api.timeout_secs > MAX_TIMEOUT_SECS {
            anyhow::bail!(
                "timeout_secs must be between 1 and {} seconds, got {}",
                MAX_TIMEOUT_SECS,
                self.api.timeout_secs
            );
        }

        match self.api.backend {
            BackendKind::Http => {
                let url = self.api.base_url.trim();
                if url.is_empty() {
                    anyhow::bail!("base_url cannot be empty");
                }
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    anyhow::bail!("base_url must start with http:// or https://, got '{}'", url);
                }
            }
            BackendKind::Fixture => match &self.api.fixture_path {
                Some(path) if !path.as_os_str().is_empty() => {}
                _ => anyhow::bail!("backend 'fixture' requires fixture_path"),
            },
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# Vitae Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
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
            .map(|dir| dir.join("vitae"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}

//! Configuration file loading with precedence handling.

use super::defaults::{self, DEFAULT_ITEM_KIND};
use crate::model::{LayoutConfig, PageIndicatorPlacement, DEFAULT_ITEM_HEIGHT};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "LISTKIT_CONFIG";

/// Environment variable overriding the state cache directory.
pub const CACHE_DIR_ENV: &str = "LISTKIT_CACHE_DIR";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/listkit/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Default grid span.
    #[serde(default)]
    pub span: Option<f64>,

    /// Fallback item height in cells.
    #[serde(default)]
    pub item_height: Option<f64>,

    /// Gap between cells on a row.
    #[serde(default)]
    pub item_spacing: Option<f64>,

    /// Gap between rows.
    #[serde(default)]
    pub line_spacing: Option<f64>,

    /// Default page indicator placement (`"below"` or `"overlay"`).
    #[serde(default)]
    pub page_indicator: Option<PageIndicatorPlacement>,

    /// Item-view kind registered as the fallback.
    #[serde(default)]
    pub default_item_kind: Option<String>,

    /// Directory holding state cache snapshots.
    #[serde(default)]
    pub cache_dir: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Default grid span.
    pub span: f64,
    /// Fallback item height.
    pub item_height: f64,
    /// Gap between cells on a row.
    pub item_spacing: f64,
    /// Gap between rows.
    pub line_spacing: f64,
    /// Default page indicator placement.
    pub page_indicator: Option<PageIndicatorPlacement>,
    /// Fallback item-view kind.
    pub default_item_kind: String,
    /// State cache directory, `None` for the platform default.
    pub cache_dir: Option<PathBuf>,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            span: 0.0,
            item_height: DEFAULT_ITEM_HEIGHT,
            item_spacing: 0.0,
            line_spacing: 0.0,
            page_indicator: None,
            default_item_kind: DEFAULT_ITEM_KIND.to_string(),
            cache_dir: None,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Default layout described by this configuration.
    pub fn layout(&self) -> LayoutConfig {
        LayoutConfig::default()
            .with_span(self.span)
            .with_item_height(self.item_height)
            .with_spacing(self.item_spacing, self.line_spacing)
            .with_page_indicator(self.page_indicator)
    }

    /// Seed the process configuration for components built from now on.
    pub fn apply_to_process(&self) {
        let layout = self.layout();
        let kind = self.default_item_kind.clone();
        debug!(span = layout.span, default_item_kind = %kind, "Applying process configuration");
        defaults::configure(|config| {
            config.default_layout = layout;
            config.default_item_kind = kind;
        });
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/listkit/listkit.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("listkit").join("listkit.log")
    } else {
        PathBuf::from("listkit.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
/// Returns `Err` if file exists but cannot be read or parsed.
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/listkit/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("listkit").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (like CLI `--config`)
/// 2. `LISTKIT_CONFIG` environment variable
/// 3. Default path `~/.config/listkit/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        if env_path.is_empty() {
            return Err(ConfigError::InvalidPath(format!("{CONFIG_ENV} is empty")));
        }
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `LISTKIT_CACHE_DIR`: Override the state cache directory
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(dir) = std::env::var(CACHE_DIR_ENV) {
        if !dir.is_empty() {
            config.cache_dir = Some(PathBuf::from(dir));
        }
    }

    config
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        span: config.span.unwrap_or(defaults.span),
        item_height: config.item_height.unwrap_or(defaults.item_height),
        item_spacing: config.item_spacing.unwrap_or(defaults.item_spacing),
        line_spacing: config.line_spacing.unwrap_or(defaults.line_spacing),
        page_indicator: config.page_indicator.or(defaults.page_indicator),
        default_item_kind: config
            .default_item_kind
            .unwrap_or(defaults.default_item_kind),
        cache_dir: config.cache_dir.or(defaults.cache_dir),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    span_override: Option<f64>,
    page_indicator_override: Option<PageIndicatorPlacement>,
) -> ResolvedConfig {
    if let Some(span) = span_override {
        config.span = span;
    }

    if let Some(placement) = page_indicator_override {
        config.page_indicator = Some(placement);
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;

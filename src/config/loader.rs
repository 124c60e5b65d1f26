//! Configuration file loading with precedence handling.

use crate::model::{FilmFormat, FilmOrientation, LightingCondition, Settings};
use crate::storage::default_store_path;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "PINHOLE_CONFIG";

/// Environment variable overriding the profile store path.
pub const STORE_ENV_VAR: &str = "PINHOLE_STORE";

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

    /// A field parsed but names something that does not exist.
    #[error("Invalid value for {field}: '{value}'")]
    InvalidValue {
        /// Dotted field name, e.g. `defaults.film_format`.
        field: String,
        /// The rejected value.
        value: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/pinhole/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Path to the JSON file holding saved profiles.
    #[serde(default)]
    pub store_path: Option<PathBuf>,

    /// Starting camera settings.
    #[serde(default)]
    pub defaults: Option<DefaultsSection>,
}

/// `[defaults]` section: the settings the calculator starts with.
///
/// ```toml
/// [defaults]
/// focal_length = 50.0
/// film_format = "6x9"
/// condition = "Bright Sun"
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DefaultsSection {
    /// Focal length in millimetres.
    #[serde(default)]
    pub focal_length: Option<f64>,
    /// Pinhole diameter in millimetres.
    #[serde(default)]
    pub pinhole_size: Option<f64>,
    /// Film format name from the catalog.
    #[serde(default)]
    pub film_format: Option<String>,
    /// `landscape` or `portrait`.
    #[serde(default)]
    pub film_orientation: Option<FilmOrientation>,
    /// Film speed.
    #[serde(default)]
    pub iso: Option<u32>,
    /// Lighting condition name from the catalog.
    #[serde(default)]
    pub condition: Option<String>,
    /// Starting bracket offset in stops.
    #[serde(default)]
    pub bracket_stops: Option<f64>,
    /// Start with reciprocity correction on.
    #[serde(default)]
    pub reciprocity_failure: Option<bool>,
    /// Start with the red filter on.
    #[serde(default)]
    pub red_filter: Option<bool>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Settings the session starts with.
    pub settings: Settings,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Path to the profile store.
    pub store_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            log_file_path: default_log_path(),
            store_path: default_store_path(),
        }
    }
}

/// Overrides taken from command-line flags.
///
/// Names are already resolved against the catalogs; `None` leaves the
/// configured value alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOverrides {
    /// `--store`
    pub store_path: Option<PathBuf>,
    /// `--focal-length`
    pub focal_length: Option<f64>,
    /// `--pinhole`
    pub pinhole_size: Option<f64>,
    /// `--film`
    pub film_format: Option<FilmFormat>,
    /// `--portrait`
    pub film_orientation: Option<FilmOrientation>,
    /// `--iso`
    pub iso: Option<u32>,
    /// `--condition`
    pub condition: Option<&'static LightingCondition>,
    /// `--bracket`
    pub bracket_stops: Option<f64>,
    /// `--reciprocity`
    pub reciprocity_failure: Option<bool>,
    /// `--red-filter`
    pub red_filter: Option<bool>,
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/pinhole/pinhole.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("pinhole").join("pinhole.log")
    } else {
        PathBuf::from("pinhole.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
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
/// Returns `~/.config/pinhole/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pinhole").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `PINHOLE_CONFIG` environment variable
/// 3. Default path `~/.config/pinhole/config.toml`
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

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        if env_path.is_empty() {
            return Err(ConfigError::InvalidPath(format!("{CONFIG_ENV_VAR} is empty")));
        }
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
///
/// # Errors
///
/// `InvalidValue` when `defaults.film_format` or `defaults.condition` is not a
/// catalog name.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let settings = match config.defaults {
        Some(section) => merge_defaults(defaults.settings, section)?,
        None => defaults.settings,
    };

    Ok(ResolvedConfig {
        settings,
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        store_path: config.store_path.unwrap_or(defaults.store_path),
    })
}

fn merge_defaults(base: Settings, section: DefaultsSection) -> Result<Settings, ConfigError> {
    let film_format = match section.film_format {
        Some(name) => FilmFormat::find(&name).ok_or(ConfigError::InvalidValue {
            field: "defaults.film_format".to_string(),
            value: name,
        })?,
        None => base.film_format,
    };

    let selected_condition = match section.condition {
        Some(name) if LightingCondition::find(&name).is_none() => {
            return Err(ConfigError::InvalidValue {
                field: "defaults.condition".to_string(),
                value: name,
            });
        }
        Some(name) => Some(name),
        None => base.selected_condition.clone(),
    };

    Ok(Settings {
        focal_length: section.focal_length.unwrap_or(base.focal_length),
        pinhole_size: section.pinhole_size.unwrap_or(base.pinhole_size),
        film_format,
        film_orientation: section.film_orientation.unwrap_or(base.film_orientation),
        iso: section.iso.unwrap_or(base.iso),
        selected_condition,
        bracket_stops: section.bracket_stops.unwrap_or(base.bracket_stops),
        use_reciprocity_failure: section
            .reciprocity_failure
            .unwrap_or(base.use_reciprocity_failure),
        use_red_filter: section.red_filter.unwrap_or(base.use_red_filter),
    })
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `PINHOLE_STORE`: Override the profile store path
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(store) = std::env::var(STORE_ENV_VAR) {
        if !store.is_empty() {
            config.store_path = PathBuf::from(store);
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, overrides: &CliOverrides) -> ResolvedConfig {
    if let Some(store_path) = &overrides.store_path {
        config.store_path = store_path.clone();
    }

    let mut settings = config.settings;
    if let Some(focal_length) = overrides.focal_length {
        settings = settings.with_focal_length(focal_length);
    }
    if let Some(pinhole_size) = overrides.pinhole_size {
        settings = settings.with_pinhole_size(pinhole_size);
    }
    if let Some(film_format) = overrides.film_format {
        settings = settings.with_film_format(film_format);
    }
    if let Some(orientation) = overrides.film_orientation {
        settings = settings.with_film_orientation(orientation);
    }
    if let Some(iso) = overrides.iso {
        settings = settings.with_iso(iso);
    }
    if let Some(condition) = overrides.condition {
        settings = settings.with_condition(Some(condition.name.to_string()));
    }
    if let Some(stops) = overrides.bracket_stops {
        settings = settings.with_bracket_stops(stops);
    }
    if let Some(enabled) = overrides.reciprocity_failure {
        settings = settings.with_reciprocity_failure(enabled);
    }
    if let Some(enabled) = overrides.red_filter {
        settings = settings.with_red_filter(enabled);
    }
    config.settings = settings;

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;

//! Configuration module.
//!
//! Resolution chain: built-in defaults, then the TOML file, then environment
//! variables, then command-line flags.

pub mod keybindings;
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, CliOverrides, ConfigError,
    ConfigFile, DefaultsSection, ResolvedConfig, CONFIG_ENV_VAR, STORE_ENV_VAR,
};

//! Configuration module.
//!
//! `defaults` holds the UI-thread configuration components read at
//! construction; `loader` resolves the TOML config file, environment and CLI
//! overrides into values that seed it.

pub mod defaults;
pub mod loader;

pub use defaults::{Configuration, ViewHook, DEFAULT_ITEM_KIND};
pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, ConfigError, ConfigFile,
    ResolvedConfig,
};

//! Configuration module for scfw
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SCFW_*)
//! 3. Config file (`--config`, `SCFW_CONFIG`, or `<config_dir>/scfw/config.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    default_config_path, load_effective, load_with_warnings, with_env_overrides,
    with_overrides_from, ConfigError, ConfigWarning, CONFIG_ENV,
};
pub use types::{Config, LoggingConfig, PolicyConfig, VerifierConfig};

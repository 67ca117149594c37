//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::value_objects::WarnPolicy;

use super::types::Config;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "SCFW_CONFIG";

/// Error loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{line}")?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{suggestion}'?)")?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// `<config_dir>/scfw/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("scfw").join("config.toml"))
}

/// Load the effective configuration.
///
/// An explicit path (flag or `SCFW_CONFIG`) must exist; the default user
/// config is optional. Environment overrides are applied last.
pub fn load_effective(explicit: Option<&Path>) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let explicit = explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()).map(PathBuf::from));

    let (config, warnings) = match explicit {
        Some(path) => load_with_warnings(&path)?,
        None => match default_config_path().filter(|p| p.exists()) {
            Some(path) => load_with_warnings(&path)?,
            None => (Config::default(), Vec::new()),
        },
    };

    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (SCFW_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides read through `lookup`
pub fn with_overrides_from(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
    // SCFW_ON_WARN
    if let Some(value) = lookup("SCFW_ON_WARN") {
        match WarnPolicy::from_label(value.trim()) {
            Some(policy) => config.policy.on_warn = policy,
            None => tracing::warn!("ignoring unknown SCFW_ON_WARN value '{value}'"),
        }
    }

    // SCFW_LOG_FILE (empty disables)
    if let Some(value) = lookup("SCFW_LOG_FILE") {
        let value = value.trim();
        config.logging.json_file = (!value.is_empty()).then(|| PathBuf::from(value));
    }

    // SCFW_VERIFIER_COMMAND (whitespace-separated)
    if let Some(value) = lookup("SCFW_VERIFIER_COMMAND") {
        config.verifier.command = value.split_whitespace().map(str::to_string).collect();
    }

    config
}

/// Every key the configuration file understands, for typo suggestions
const KNOWN_KEYS: &[&str] = &[
    "policy",
    "on_warn",
    "verifier",
    "blocklist",
    "command",
    "ecosystem",
    "package",
    "versions",
    "severity",
    "detail",
    "logging",
    "json_file",
];

/// Largest edit distance still worth suggesting
const MAX_SUGGESTION_DISTANCE: usize = 2;

/// 1-based line of the first occurrence of `needle`
fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    KNOWN_KEYS
        .iter()
        .map(|known| (*known, levenshtein(unknown, known)))
        .min_by_key(|(_, distance)| *distance)
        .filter(|(_, distance)| *distance <= MAX_SUGGESTION_DISTANCE)
        .map(|(known, _)| known.to_string())
}

/// Edit distance over chars, keeping a single row of the table
fn levenshtein(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = diagonal + usize::from(ca != *cb);
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(diagonal + 1);
        }
    }

    row[b.len()]
}

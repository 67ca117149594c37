//! Configuration type definitions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::WarnPolicy;
use crate::infrastructure::verifiers::BlocklistRule;

/// Decision policy configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// How `warn` findings are resolved
    #[serde(default)]
    pub on_warn: WarnPolicy,
}

/// Verifier configuration
///
/// ```toml
/// [verifier]
/// command = ["osv-check", "--json"]
///
/// [[verifier.blocklist]]
/// ecosystem = "npm"
/// package = "event-stream"
/// versions = ["3.3.6"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifierConfig {
    #[serde(default)]
    pub blocklist: Vec<BlocklistRule>,

    /// External verifier program and its arguments
    #[serde(default)]
    pub command: Vec<String>,
}

/// Run log configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Append a JSON line per run to this file
    #[serde(default)]
    pub json_file: Option<PathBuf>,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub policy: PolicyConfig,

    #[serde(default)]
    pub verifier: VerifierConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

//! Error types for scfw
//!
//! Uses `thiserror` for library errors. Every variant except `Execution`
//! is a pre-verdict failure and forces the run to abort.

use thiserror::Error;

use crate::domain::ports::{ProcessError, VerifierError};

/// Result type alias for firewall operations
pub type FirewallResult<T> = Result<T, FirewallError>;

/// Main error type for firewall operations
#[derive(Error, Debug)]
pub enum FirewallError {
    /// Command handed to an adapter does not belong to its ecosystem
    #[error("malformed package manager command: {0}")]
    MalformedCommand(String),

    /// The dry-run probe could not be spawned or exited abnormally
    #[error("dry-run of `{command}` failed: {source}")]
    DryRunExecutionFailure {
        command: String,
        #[source]
        source: ProcessError,
    },

    /// An entry of the dry-run report could not be split into package and version
    #[error("failed to parse install target '{entry}': {reason}")]
    TargetParseFailure { entry: String, reason: String },

    /// Verifier call errored or timed out
    #[error("verifier unavailable: {0}")]
    VerifierUnavailable(#[from] VerifierError),

    /// The configuration could not be loaded
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The run was interrupted before a verdict was reached
    #[error("run cancelled before a verdict was reached")]
    Cancelled,

    /// The real package manager command could not be started
    #[error("failed to execute `{command}`: {source}")]
    Execution {
        command: String,
        #[source]
        source: ProcessError,
    },
}

impl FirewallError {
    pub fn target_parse(entry: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::TargetParseFailure {
            entry: entry.into(),
            reason: reason.into(),
        }
    }

    /// Short machine-readable kind, used in run logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedCommand(_) => "malformed_command",
            Self::DryRunExecutionFailure { .. } => "dry_run_execution_failure",
            Self::TargetParseFailure { .. } => "target_parse_failure",
            Self::VerifierUnavailable(_) => "verifier_unavailable",
            Self::Configuration(_) => "configuration",
            Self::Cancelled => "cancelled",
            Self::Execution { .. } => "execution",
        }
    }
}

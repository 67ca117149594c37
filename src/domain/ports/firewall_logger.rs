//! Firewall Logger Port
//!
//! Loggers receive the outcome of a finished run. They are a best-effort
//! side channel: a failing logger never changes the decided action.

use thiserror::Error;

use crate::domain::entities::RunRecord;

/// Error inside a single logger
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoggerError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    /// Remote or external sink rejected the record
    #[error("sink error: {0}")]
    Sink(String),
}

/// Trait for firewall run loggers
///
/// Implementations can be:
/// - TracingLogger: structured `tracing` event
/// - JsonLinesLogger: NDJSON record appended to a file
pub trait FirewallLogger: Send + Sync {
    /// Name used when reporting this logger's failures
    fn name(&self) -> &str;

    /// Record the outcome of a completed run
    fn log(&self, record: &RunRecord) -> Result<(), LoggerError>;
}

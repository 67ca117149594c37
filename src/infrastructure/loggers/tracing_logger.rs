//! Tracing Logger
//!
//! Emits each run as a structured `tracing` event under the `scfw::run`
//! target at `info` level.

use crate::domain::entities::RunRecord;
use crate::domain::ports::{FirewallLogger, LoggerError};

pub struct TracingLogger;

impl FirewallLogger for TracingLogger {
    fn name(&self) -> &str {
        "tracing"
    }

    fn log(&self, record: &RunRecord) -> Result<(), LoggerError> {
        let targets = record
            .targets
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let reason = record.reason.as_deref().unwrap_or("");

        tracing::info!(
            target: "scfw::run",
            action = record.action.past_tense(),
            ecosystem = %record.ecosystem,
            targets = %targets,
            reason = reason,
            "{}",
            record.message()
        );

        Ok(())
    }
}

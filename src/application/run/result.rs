//! Run Result
//!
//! Outcome of a single firewall run.

use crate::domain::policies::{Decision, RunPhase};
use crate::domain::value_objects::{FirewallAction, InstallTarget};
use crate::error::FirewallError;

/// Exit code when a run is interrupted after being allowed but before the
/// real command starts (`128 + SIGINT`)
pub const CANCELLED_EXIT_CODE: i32 = 130;

/// Exit code when the real command could not be started
pub const EXECUTION_FAILURE_EXIT_CODE: i32 = 127;

/// Result of a firewall run
#[derive(Debug)]
pub struct RunOutcome {
    /// Final action
    pub action: FirewallAction,
    /// Phase the run ended in
    pub phase: RunPhase,
    /// Every target resolution produced, in resolution order
    pub targets: Vec<InstallTarget>,
    /// Decision, when the run got as far as deciding
    pub decision: Option<Decision>,
    /// Whether the user was asked to confirm warnings
    pub prompted: bool,
    /// Error that aborted the run or prevented execution
    pub error: Option<FirewallError>,
    /// Cause reported to loggers when the action was not a clean allow
    pub reason: Option<String>,
    /// Process exit code for the firewall
    pub exit_code: i32,
}

impl RunOutcome {
    /// Whether the real command was run
    pub fn executed(&self) -> bool {
        self.phase == RunPhase::Executed
    }

    /// Targets that caused a block, or every target otherwise
    pub fn relevant_targets(&self) -> Vec<InstallTarget> {
        match (&self.action, &self.decision) {
            (FirewallAction::Block, Some(decision)) => {
                let flagged: Vec<InstallTarget> = decision
                    .blocking
                    .iter()
                    .chain(decision.warnings.iter())
                    .map(|f| f.target.clone())
                    .collect();
                if flagged.is_empty() {
                    self.targets.clone()
                } else {
                    flagged
                }
            }
            _ => self.targets.clone(),
        }
    }
}

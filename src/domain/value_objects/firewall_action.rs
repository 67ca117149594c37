//! Firewall action value object - terminal classification of a run

use serde::{Deserialize, Serialize};

// Refusal codes sit outside the statuses pip (0-4, 23) and npm (1, errno
// values, 128 + signal) report for their own failures, so a caller can tell
// a refusal from a failed install.

/// Exit code for a run whose targets were blocked
pub const BLOCK_EXIT_CODE: i32 = 90;

/// Exit code for a run that aborted before reaching a verdict
pub const ABORT_EXIT_CODE: i32 = 91;

/// Action taken by the firewall for one run
///
/// `Abort` means no verdict was reached (resolution or verification failed);
/// `Block` means a verdict explicitly forbade the install.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirewallAction {
    Allow,
    Block,
    Abort,
}

impl FirewallAction {
    /// Past-tense verb used in run log messages
    pub fn past_tense(&self) -> &'static str {
        match self {
            FirewallAction::Allow => "allowed",
            FirewallAction::Block => "blocked",
            FirewallAction::Abort => "aborted",
        }
    }

    /// Process exit code for a refused run, `None` for `Allow`
    pub fn refusal_exit_code(&self) -> Option<i32> {
        match self {
            FirewallAction::Allow => None,
            FirewallAction::Block => Some(BLOCK_EXIT_CODE),
            FirewallAction::Abort => Some(ABORT_EXIT_CODE),
        }
    }
}

impl std::fmt::Display for FirewallAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FirewallAction::Allow => "allow",
            FirewallAction::Block => "block",
            FirewallAction::Abort => "abort",
        };
        write!(f, "{s}")
    }
}

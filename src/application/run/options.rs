//! Run Options
//!
//! Per-run knobs for the run use case.

use crate::domain::value_objects::WarnPolicy;

/// Options for the run use case
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Verify and report, but never execute the real command
    pub dry_run: bool,
    /// How warning findings are resolved
    pub warn_policy: WarnPolicy,
}

impl RunOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_warn_policy(mut self, warn_policy: WarnPolicy) -> Self {
        self.warn_policy = warn_policy;
        self
    }
}

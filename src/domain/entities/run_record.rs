//! Run record - the uniform context handed to every firewall logger

use crate::domain::value_objects::{Ecosystem, FirewallAction, InstallTarget};

/// Outcome of one firewall run, as seen by loggers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRecord {
    /// Final action, decided before any logger sees the record
    pub action: FirewallAction,
    /// Ecosystem of the inspected command
    pub ecosystem: Ecosystem,
    /// Package manager command line as given by the user
    pub command: Vec<String>,
    /// Targets relevant to the action (all resolved targets on allow,
    /// the offending ones on block, whatever was resolved on abort)
    pub targets: Vec<InstallTarget>,
    /// Cause of an abort
    pub reason: Option<String>,
}

impl RunRecord {
    /// Command line joined with spaces
    pub fn command_line(&self) -> String {
        self.command.join(" ")
    }

    /// Human-readable summary, e.g. `Command 'pip install x' was blocked`
    pub fn message(&self) -> String {
        format!(
            "Command '{}' was {}",
            self.command_line(),
            self.action.past_tense()
        )
    }
}

//! Run Use Case
//!
//! Orchestrates one firewall run:
//! 1. Resolve the install targets through the package manager's dry-run
//! 2. Verify the targets
//! 3. Decide allow, block or abort
//! 4. Log the run, exactly once
//! 5. Execute the real command, only on allow
//!
//! Every step is checked against the run state machine.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::domain::entities::{normalize_findings, RunRecord};
use crate::domain::policies::{decide, PhaseError, RunPhase, Verdict};
use crate::domain::ports::{Confirmer, FirewallLogger, PackageManagerCommand, Verifier};
use crate::domain::value_objects::{Ecosystem, FirewallAction, InstallTarget};
use crate::error::FirewallError;

use super::dispatch::dispatch;
use super::options::RunOptions;
use super::result::{RunOutcome, CANCELLED_EXIT_CODE, EXECUTION_FAILURE_EXIT_CODE};

const CONFIRM_PROMPT: &str = "Proceed with installation?";

/// Run use case - gates one package manager command
pub struct RunUseCase {
    verifier: Box<dyn Verifier>,
    loggers: Vec<Box<dyn FirewallLogger>>,
    confirmer: Box<dyn Confirmer>,
    cancelled: Arc<AtomicBool>,
}

impl RunUseCase {
    pub fn new(
        verifier: Box<dyn Verifier>,
        loggers: Vec<Box<dyn FirewallLogger>>,
        confirmer: Box<dyn Confirmer>,
    ) -> Self {
        Self {
            verifier,
            loggers,
            confirmer,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Observe an interrupt flag shared with the process runner
    pub fn with_cancellation(mut self, cancelled: Arc<AtomicBool>) -> Self {
        self.cancelled = cancelled;
        self
    }

    fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Execute the run use case
    pub fn execute(&self, command: &dyn PackageManagerCommand, options: &RunOptions) -> RunOutcome {
        let mut outcome = self
            .settle(command, options)
            .unwrap_or_else(phase_failure);

        let will_execute = outcome.action == FirewallAction::Allow && !options.dry_run;
        if will_execute && self.is_cancelled() {
            outcome.error = Some(FirewallError::Cancelled);
            outcome.reason = Some("cancelled before execution".to_string());
            outcome.exit_code = CANCELLED_EXIT_CODE;
        }

        self.log(command.ecosystem(), command.tokens(), &outcome);

        if will_execute && outcome.error.is_none() {
            self.run_command(command, &mut outcome);
        }

        outcome
    }

    /// Abort a run whose command could not be set up at all (unreadable
    /// configuration, unusable command line). Logged like any other abort.
    pub fn abort_unstarted(
        &self,
        ecosystem: Ecosystem,
        tokens: &[String],
        error: FirewallError,
    ) -> RunOutcome {
        let outcome = RunPhase::Start
            .advance(RunPhase::Resolving)
            .and_then(|phase| abort(phase, Vec::new(), error))
            .unwrap_or_else(phase_failure);

        self.log(ecosystem, tokens, &outcome);
        outcome
    }

    /// Drive the run up to its final action, without side effects on the
    /// user's environment
    fn settle(
        &self,
        command: &dyn PackageManagerCommand,
        options: &RunOptions,
    ) -> Result<RunOutcome, PhaseError> {
        let phase = RunPhase::Start.advance(RunPhase::Resolving)?;

        let targets = match command.would_install() {
            Ok(targets) => targets,
            Err(e) => return abort(phase, Vec::new(), e),
        };
        tracing::debug!(count = targets.len(), "resolved install targets");
        if self.is_cancelled() {
            return abort(phase, targets, FirewallError::Cancelled);
        }

        let phase = phase.advance(RunPhase::Verifying)?;

        let findings = if targets.is_empty() {
            Vec::new()
        } else {
            match self.verifier.verify(&targets) {
                Ok(findings) => normalize_findings(&targets, findings),
                Err(e) => return abort(phase, targets, FirewallError::VerifierUnavailable(e)),
            }
        };
        if self.is_cancelled() {
            return abort(phase, targets, FirewallError::Cancelled);
        }

        let phase = phase.advance(RunPhase::Deciding)?;
        let decision = decide(&findings, options.warn_policy);

        let prompted = decision.verdict == Verdict::Confirm;
        let allowed = match decision.verdict {
            Verdict::Allow => true,
            Verdict::Block => false,
            Verdict::Confirm => self
                .confirmer
                .confirm(&format!("{}{CONFIRM_PROMPT}", decision.report())),
        };

        let (action, phase, reason) = if allowed {
            (FirewallAction::Allow, phase.advance(RunPhase::Allowed)?, None)
        } else {
            let reason = if prompted {
                "installation of packages with warnings was not confirmed"
            } else {
                "verifier reported blocking findings"
            };
            (
                FirewallAction::Block,
                phase.advance(RunPhase::Blocked)?,
                Some(reason.to_string()),
            )
        };

        Ok(RunOutcome {
            action,
            phase,
            targets,
            decision: Some(decision),
            prompted,
            error: None,
            reason,
            exit_code: action.refusal_exit_code().unwrap_or(0),
        })
    }

    fn log(&self, ecosystem: Ecosystem, tokens: &[String], outcome: &RunOutcome) {
        let record = RunRecord {
            action: outcome.action,
            ecosystem,
            command: tokens.to_vec(),
            targets: outcome.relevant_targets(),
            reason: outcome.reason.clone(),
        };

        let failures = dispatch(&self.loggers, &record);
        if failures > 0 {
            tracing::debug!(failures, "some run loggers failed");
        }
    }

    fn run_command(&self, command: &dyn PackageManagerCommand, outcome: &mut RunOutcome) {
        match command.run() {
            Ok(status) => {
                if let Ok(phase) = outcome.phase.advance(RunPhase::Executed) {
                    outcome.phase = phase;
                }
                outcome.exit_code = status;
            }
            Err(e) => {
                outcome.exit_code = EXECUTION_FAILURE_EXIT_CODE;
                outcome.error = Some(e);
            }
        }
    }
}

/// Outcome for a run that hit an impossible phase transition
fn phase_failure(e: PhaseError) -> RunOutcome {
    tracing::error!("{e}");
    RunOutcome {
        action: FirewallAction::Abort,
        phase: e.from,
        targets: Vec::new(),
        decision: None,
        prompted: false,
        error: None,
        reason: Some(e.to_string()),
        exit_code: FirewallAction::Abort.refusal_exit_code().unwrap_or(1),
    }
}

/// Abort from `phase`, keeping whatever was resolved so far
fn abort(
    phase: RunPhase,
    targets: Vec<InstallTarget>,
    error: FirewallError,
) -> Result<RunOutcome, PhaseError> {
    let phase = phase.advance(RunPhase::Aborted)?;
    tracing::debug!(kind = error.kind(), "aborting run: {error}");

    Ok(RunOutcome {
        action: FirewallAction::Abort,
        phase,
        targets,
        decision: None,
        prompted: false,
        reason: Some(error.to_string()),
        error: Some(error),
        exit_code: FirewallAction::Abort.refusal_exit_code().unwrap_or(1),
    })
}

//! Output Rendering
//!
//! Renders run outcomes for the terminal. Everything the firewall itself
//! says goes to stderr so the package manager keeps stdout to itself.

use crossterm::style::Stylize;
use is_terminal::IsTerminal;

use crate::application::RunOutcome;
use crate::domain::policies::Decision;
use crate::domain::value_objects::FirewallAction;
use crate::error::FirewallError;

/// Whether stderr should be colored (`NO_COLOR` disables it)
pub fn stderr_supports_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal()
}

/// Text renderer for run outcomes
#[derive(Debug, Clone, Copy, Default)]
pub struct OutcomeRenderer {
    /// Whether to use colors
    pub color: bool,
}

impl OutcomeRenderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint_error(&self, text: &str) -> String {
        if self.color {
            format!("{}", text.red().bold())
        } else {
            text.to_string()
        }
    }

    fn paint_warning(&self, text: &str) -> String {
        if self.color {
            format!("{}", text.yellow().bold())
        } else {
            text.to_string()
        }
    }

    fn paint_dim(&self, text: &str) -> String {
        if self.color {
            format!("{}", text.dark_grey())
        } else {
            text.to_string()
        }
    }

    /// One-line abort notice naming the cause
    pub fn abort_message(&self, command_line: &str, cause: &str) -> String {
        format!(
            "{} Command '{command_line}' was aborted: {cause}",
            self.paint_error("error:")
        )
    }

    /// Flagged decision not yet shown in a confirmation prompt
    fn unreported_decision<'a>(&self, outcome: &'a RunOutcome) -> Option<&'a Decision> {
        outcome
            .decision
            .as_ref()
            .filter(|d| !d.is_clear() && !outcome.prompted)
    }

    /// Render what the user needs to know about `outcome`; empty when a
    /// clean allow simply ran
    pub fn render(&self, outcome: &RunOutcome, command_line: &str, dry_run: bool) -> String {
        let mut out = String::new();

        match outcome.action {
            FirewallAction::Abort => {
                let cause = outcome
                    .error
                    .as_ref()
                    .map(ToString::to_string)
                    .or_else(|| outcome.reason.clone())
                    .unwrap_or_else(|| "unknown error".to_string());
                out.push_str(&self.abort_message(command_line, &cause));
                out.push('\n');
            }
            FirewallAction::Block => {
                if let Some(decision) = self.unreported_decision(outcome) {
                    out.push_str(&decision.report());
                    out.push('\n');
                }
                out.push_str(&format!(
                    "{} Command '{command_line}' was blocked\n",
                    self.paint_error("blocked:")
                ));
            }
            FirewallAction::Allow => {
                if let Some(decision) = self.unreported_decision(outcome) {
                    out.push_str(&decision.report());
                    out.push('\n');
                }

                match &outcome.error {
                    Some(FirewallError::Cancelled) => out.push_str(&format!(
                        "{} Command '{command_line}' was cancelled before it ran\n",
                        self.paint_warning("cancelled:")
                    )),
                    Some(error) => out.push_str(&format!(
                        "{} {error}\n",
                        self.paint_error("error:")
                    )),
                    None if dry_run => out.push_str(&format!(
                        "{} Command '{command_line}' would be allowed ({} {} verified)\n",
                        self.paint_dim("dry-run:"),
                        outcome.targets.len(),
                        if outcome.targets.len() == 1 { "package" } else { "packages" }
                    )),
                    None => {}
                }
            }
        }

        out
    }
}

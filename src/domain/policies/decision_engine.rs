//! Decision Engine
//!
//! Pure reduction from verifier findings to a verdict plus a report.
//! `Abort` is never produced here: it belongs to failures that happen
//! before any finding exists.

use crate::domain::entities::Finding;
use crate::domain::value_objects::WarnPolicy;

/// Outcome of evaluating findings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Nothing stands in the way
    Allow,
    /// Only warnings stand in the way; ask the user
    Confirm,
    /// At least one finding forbids the install
    Block,
}

/// Verdict together with the findings that shaped it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub verdict: Verdict,
    /// Findings with `Block` severity, in input order
    pub blocking: Vec<Finding>,
    /// Findings with `Warn` severity, in input order
    pub warnings: Vec<Finding>,
}

impl Decision {
    /// Human-readable report of everything that was flagged
    pub fn report(&self) -> String {
        let mut out = String::new();

        if !self.blocking.is_empty() {
            out.push_str("The following packages were blocked:\n");
            for finding in &self.blocking {
                out.push_str(&format!("  - {finding}\n"));
            }
        }

        if !self.warnings.is_empty() {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str("The following packages have warnings:\n");
            for finding in &self.warnings {
                out.push_str(&format!("  - {finding}\n"));
            }
        }

        out
    }

    /// True when no finding was flagged at all
    pub fn is_clear(&self) -> bool {
        self.blocking.is_empty() && self.warnings.is_empty()
    }
}

/// Reduce findings to a decision.
///
/// Any `Block` finding blocks, regardless of order or duplicates. Failing
/// that, `Warn` findings are resolved by `warn_policy`. Otherwise allow.
pub fn decide(findings: &[Finding], warn_policy: WarnPolicy) -> Decision {
    let blocking: Vec<Finding> = findings.iter().filter(|f| f.is_blocking()).cloned().collect();
    let warnings: Vec<Finding> = findings.iter().filter(|f| f.is_warning()).cloned().collect();

    let verdict = if !blocking.is_empty() {
        Verdict::Block
    } else if !warnings.is_empty() {
        match warn_policy {
            WarnPolicy::Block => Verdict::Block,
            WarnPolicy::Prompt => Verdict::Confirm,
            WarnPolicy::Allow => Verdict::Allow,
        }
    } else {
        Verdict::Allow
    };

    Decision {
        verdict,
        blocking,
        warnings,
    }
}

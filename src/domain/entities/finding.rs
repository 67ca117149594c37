//! Finding entity - a verifier's verdict about one install target

use serde::Serialize;

use crate::domain::value_objects::{InstallTarget, Severity};

/// Per-target verdict returned by a verifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub target: InstallTarget,
    pub severity: Severity,
    pub detail: String,
}

impl Finding {
    pub fn new(target: InstallTarget, severity: Severity, detail: impl Into<String>) -> Self {
        Self {
            target,
            severity,
            detail: detail.into(),
        }
    }

    /// Finding for a target nothing is known against
    pub fn clear(target: InstallTarget) -> Self {
        Self::new(target, Severity::None, "")
    }

    pub fn is_blocking(&self) -> bool {
        self.severity == Severity::Block
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warn
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.detail.is_empty() {
            write!(f, "{} [{}]", self.target, self.severity)
        } else {
            write!(f, "{} [{}]: {}", self.target, self.severity, self.detail)
        }
    }
}

/// Reduce raw verifier output to exactly one finding per target.
///
/// Targets keep their resolution order. Targets the verifier said nothing
/// about get a `Severity::None` finding; several findings for one target
/// collapse to the most severe one. Findings about targets that were not
/// asked for are kept at the end, since dropping a block would be unsafe.
pub fn normalize_findings(targets: &[InstallTarget], findings: Vec<Finding>) -> Vec<Finding> {
    let mut normalized: Vec<Finding> = targets.iter().cloned().map(Finding::clear).collect();

    for finding in findings {
        match normalized.iter_mut().find(|f| f.target == finding.target) {
            Some(existing) => {
                if finding.severity > existing.severity {
                    *existing = finding;
                }
            }
            None => normalized.push(finding),
        }
    }

    normalized
}

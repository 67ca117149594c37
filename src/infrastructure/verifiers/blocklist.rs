//! Blocklist Verifier
//!
//! Offline verifier driven by `[[verifier.blocklist]]` entries in the
//! configuration file. Each entry names a package, optionally narrowed to
//! specific versions, and the severity to report when it is about to be
//! installed.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Finding;
use crate::domain::ports::{Verifier, VerifierError};
use crate::domain::value_objects::{Ecosystem, InstallTarget, Severity};

fn default_severity() -> Severity {
    Severity::Block
}

/// A single blocklist entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlocklistRule {
    pub ecosystem: Ecosystem,
    pub package: String,
    /// Affected versions; empty means every version
    #[serde(default)]
    pub versions: Vec<String>,
    #[serde(default = "default_severity")]
    pub severity: Severity,
    #[serde(default)]
    pub detail: String,
}

impl BlocklistRule {
    fn matches(&self, target: &InstallTarget) -> bool {
        if self.ecosystem != target.ecosystem() {
            return false;
        }
        if canonical_name(self.ecosystem, &self.package)
            != canonical_name(target.ecosystem(), target.package())
        {
            return false;
        }
        self.versions.is_empty() || self.versions.iter().any(|v| v == target.version())
    }
}

/// Package names as the registry compares them.
///
/// PyPI treats runs of `-`, `_` and `.` as equivalent and ignores case;
/// npm names are compared verbatim.
fn canonical_name(ecosystem: Ecosystem, name: &str) -> String {
    match ecosystem {
        Ecosystem::Npm => name.to_string(),
        Ecosystem::Pip => {
            let mut out = String::with_capacity(name.len());
            let mut last_sep = false;
            for c in name.chars() {
                if matches!(c, '-' | '_' | '.') {
                    if !last_sep {
                        out.push('-');
                    }
                    last_sep = true;
                } else {
                    out.extend(c.to_lowercase());
                    last_sep = false;
                }
            }
            out
        }
    }
}

/// Verifier that reports configured packages
pub struct BlocklistVerifier {
    rules: Vec<BlocklistRule>,
}

impl BlocklistVerifier {
    pub fn new(rules: Vec<BlocklistRule>) -> Self {
        Self { rules }
    }
}

impl Verifier for BlocklistVerifier {
    fn name(&self) -> &str {
        "blocklist"
    }

    fn verify(&self, targets: &[InstallTarget]) -> Result<Vec<Finding>, VerifierError> {
        let findings = targets
            .iter()
            .flat_map(|target| {
                self.rules
                    .iter()
                    .filter(move |rule| rule.matches(target))
                    .map(move |rule| Finding::new(target.clone(), rule.severity, &rule.detail))
            })
            .collect();
        Ok(findings)
    }
}

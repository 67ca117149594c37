//! External Verifier
//!
//! Delegates verification to a user-configured program. The program gets a
//! JSON array of targets on stdin:
//!
//! ```json
//! [{"ecosystem": "pip", "package": "requests", "version": "2.31.0"}]
//! ```
//!
//! and must print a JSON array of findings on stdout:
//!
//! ```json
//! [{"ecosystem": "pip", "package": "requests", "version": "2.31.0",
//!   "severity": "warn", "detail": "maintainer changed"}]
//! ```
//!
//! Targets it has nothing to say about may be omitted.

use std::sync::Arc;

use serde::Deserialize;

use crate::domain::entities::Finding;
use crate::domain::ports::{ProcessInvocation, ProcessRunner, Verifier, VerifierError};
use crate::domain::value_objects::{Ecosystem, InstallTarget, Severity};

#[derive(Debug, Deserialize)]
struct WireFinding {
    ecosystem: Ecosystem,
    package: String,
    version: String,
    severity: Severity,
    #[serde(default)]
    detail: String,
}

impl WireFinding {
    fn into_finding(self) -> Result<Finding, VerifierError> {
        let target = InstallTarget::new(self.ecosystem, self.package, self.version)
            .map_err(|e| VerifierError::InvalidResponse(e.to_string()))?;
        Ok(Finding::new(target, self.severity, self.detail))
    }
}

/// Verifier backed by an external program speaking JSON over stdio
pub struct ExternalVerifier {
    program: String,
    args: Vec<String>,
    runner: Arc<dyn ProcessRunner>,
}

impl ExternalVerifier {
    /// Build from a command line (`program arg...`); `None` if it is empty
    pub fn from_command(command: &[String], runner: Arc<dyn ProcessRunner>) -> Option<Self> {
        let (program, args) = command.split_first()?;
        Some(Self {
            program: program.clone(),
            args: args.to_vec(),
            runner,
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Verifier for ExternalVerifier {
    fn name(&self) -> &str {
        "external"
    }

    fn verify(&self, targets: &[InstallTarget]) -> Result<Vec<Finding>, VerifierError> {
        let request = serde_json::to_string(targets)
            .map_err(|e| VerifierError::InvalidResponse(e.to_string()))?;
        let invocation = ProcessInvocation::new(&self.program, self.args.clone()).with_stdin(request);

        let stdout = self.runner.capture(&invocation)?;

        let wire: Vec<WireFinding> = serde_json::from_str(stdout.trim())
            .map_err(|e| VerifierError::InvalidResponse(e.to_string()))?;

        wire.into_iter().map(WireFinding::into_finding).collect()
    }
}

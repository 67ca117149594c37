//! Verifier Port
//!
//! A verifier turns a list of install targets into findings. The firewall
//! delegates every trust decision to one; an unavailable verifier is never
//! read as "all clear".

use thiserror::Error;

use super::ProcessError;
use crate::domain::entities::Finding;
use crate::domain::value_objects::InstallTarget;

/// Error raised when a verifier cannot produce findings
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VerifierError {
    /// Backend could not be reached
    #[error("{0}")]
    Unreachable(String),

    /// Backend answered with something that is not a list of findings
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Backend process failed
    #[error("verifier process failed: {0}")]
    Process(#[from] ProcessError),
}

/// Trait for verifiers
///
/// Implementations:
/// - `BlocklistVerifier`: offline, configuration-driven
/// - `ExternalVerifier`: JSON over stdio to a configured program
/// - `CompositeVerifier`: concatenates several verifiers
pub trait Verifier: Send + Sync {
    /// Name used in diagnostics
    fn name(&self) -> &str;

    /// Produce findings for `targets`
    fn verify(&self, targets: &[InstallTarget]) -> Result<Vec<Finding>, VerifierError>;
}

/// Verifier that runs several verifiers in order and concatenates findings.
///
/// Any member failing fails the whole verification.
pub struct CompositeVerifier {
    verifiers: Vec<Box<dyn Verifier>>,
}

impl CompositeVerifier {
    pub fn new(verifiers: Vec<Box<dyn Verifier>>) -> Self {
        Self { verifiers }
    }

    pub fn len(&self) -> usize {
        self.verifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verifiers.is_empty()
    }
}

impl Verifier for CompositeVerifier {
    fn name(&self) -> &str {
        "composite"
    }

    fn verify(&self, targets: &[InstallTarget]) -> Result<Vec<Finding>, VerifierError> {
        let mut findings = Vec::new();
        for verifier in &self.verifiers {
            tracing::debug!(verifier = verifier.name(), "verifying {} targets", targets.len());
            findings.extend(verifier.verify(targets)?);
        }
        Ok(findings)
    }
}

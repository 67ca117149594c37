//! Severity of a verifier finding

use serde::{Deserialize, Serialize};

/// How strongly a finding argues against installing its target
///
/// Ordering: None < Warn < Block
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Nothing known against the target
    #[default]
    None,
    /// Suspicious but not conclusive
    Warn,
    /// Installation must not proceed
    Block,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::None => "none",
            Severity::Warn => "warn",
            Severity::Block => "block",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

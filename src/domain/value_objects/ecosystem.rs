//! Ecosystem value object - which package manager a command belongs to

use serde::{Deserialize, Serialize};

/// Package-management platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ecosystem {
    /// Python packages installed with pip
    Pip,
    /// Node.js packages installed with npm
    Npm,
}

impl Ecosystem {
    /// Every supported ecosystem
    pub const ALL: [Ecosystem; 2] = [Ecosystem::Pip, Ecosystem::Npm];

    /// Program name that starts a command line for this ecosystem
    pub fn program(&self) -> &'static str {
        match self {
            Ecosystem::Pip => "pip",
            Ecosystem::Npm => "npm",
        }
    }

    /// Select the ecosystem whose program name equals `token`
    pub fn from_program(token: &str) -> Option<Ecosystem> {
        Self::ALL.into_iter().find(|e| e.program() == token)
    }

    /// Index of the first token naming a known program, if any
    pub fn find_program(tokens: &[String]) -> Option<usize> {
        tokens
            .iter()
            .position(|token| Self::from_program(token).is_some())
    }
}

impl std::fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program())
    }
}

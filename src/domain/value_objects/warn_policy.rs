//! Warn policy value object
//!
//! Decides what a `Warn`-severity finding does when nothing blocks outright.

use serde::{Deserialize, Serialize};

/// Handling of warn-level findings
///
/// - `Block`: treat warnings as blocking (default)
/// - `Prompt`: ask the user; non-interactive sessions answer no
/// - `Allow`: report the warnings and proceed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WarnPolicy {
    #[default]
    Block,
    Prompt,
    Allow,
}

impl WarnPolicy {
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "block" | "deny" => Some(Self::Block),
            "prompt" | "ask" => Some(Self::Prompt),
            "allow" => Some(Self::Allow),
            _ => None,
        }
    }
}

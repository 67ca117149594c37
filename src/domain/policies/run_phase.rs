//! Run state machine with one-way transitions.
//!
//! ```text
//! Start -> Resolving -> Verifying -> Deciding -> {Allowed -> Executed, Blocked, Aborted}
//! ```
//!
//! `Aborted` is reachable only from `Resolving` or `Verifying`;
//! `Allowed` and `Blocked` only from `Deciding`. Nothing moves backwards
//! and nothing is retried.

use std::fmt;

use thiserror::Error;

/// Phase of a single firewall run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunPhase {
    Start,
    Resolving,
    Verifying,
    Deciding,
    Allowed,
    Executed,
    Blocked,
    Aborted,
}

/// Rejected phase transition
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("invalid run transition {from} -> {to}")]
pub struct PhaseError {
    pub from: RunPhase,
    pub to: RunPhase,
}

impl RunPhase {
    pub fn label(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Resolving => "resolving",
            Self::Verifying => "verifying",
            Self::Deciding => "deciding",
            Self::Allowed => "allowed",
            Self::Executed => "executed",
            Self::Blocked => "blocked",
            Self::Aborted => "aborted",
        }
    }

    /// Whether `next` is a legal successor of `self`
    pub fn can_advance_to(self, next: RunPhase) -> bool {
        matches!(
            (self, next),
            (Self::Start, Self::Resolving)
                | (Self::Resolving, Self::Verifying)
                | (Self::Resolving, Self::Aborted)
                | (Self::Verifying, Self::Deciding)
                | (Self::Verifying, Self::Aborted)
                | (Self::Deciding, Self::Allowed)
                | (Self::Deciding, Self::Blocked)
                | (Self::Allowed, Self::Executed)
        )
    }

    /// Move to `next`, rejecting anything outside the transition table
    pub fn advance(self, next: RunPhase) -> Result<RunPhase, PhaseError> {
        if self.can_advance_to(next) {
            Ok(next)
        } else {
            Err(PhaseError {
                from: self,
                to: next,
            })
        }
    }
}

impl fmt::Display for RunPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

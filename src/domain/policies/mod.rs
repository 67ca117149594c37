//! Domain Policies
//!
//! Business rules and policies that govern behavior.
//! These are pure functions that operate on domain entities.

mod decision_engine;
mod run_phase;

pub use decision_engine::{decide, Decision, Verdict};
pub use run_phase::{PhaseError, RunPhase};

//! Package Manager Adapters
//!
//! These adapters implement the `PackageManagerCommand` port, one per
//! ecosystem. The adapter is picked once, from the command's first token.

pub mod npm;
pub mod pip;
mod tokens;

#[cfg(test)]
pub(crate) mod testing;

pub use npm::NpmCommand;
pub use pip::PipCommand;
pub use tokens::DRY_RUN_FLAG;

use std::sync::Arc;

use crate::domain::ports::{PackageManagerCommand, ProcessRunner};
use crate::domain::value_objects::Ecosystem;
use crate::error::{FirewallError, FirewallResult};

/// Build the adapter for a command line, selected by its program token
pub fn command_for(
    tokens: Vec<String>,
    executable: Option<String>,
    runner: Arc<dyn ProcessRunner>,
) -> FirewallResult<Box<dyn PackageManagerCommand>> {
    let program = tokens
        .first()
        .ok_or_else(|| FirewallError::MalformedCommand("empty command".to_string()))?;

    match Ecosystem::from_program(program) {
        Some(Ecosystem::Pip) => Ok(Box::new(PipCommand::new(tokens, executable, runner)?)),
        Some(Ecosystem::Npm) => Ok(Box::new(NpmCommand::new(tokens, executable, runner)?)),
        None => Err(FirewallError::MalformedCommand(format!(
            "unsupported package manager `{program}`"
        ))),
    }
}

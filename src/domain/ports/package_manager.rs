//! Package Manager Command Port
//!
//! One implementation per ecosystem. An adapter wraps a user-supplied
//! command line and can either run it for real or work out, through the
//! package manager's own dry-run mode, what it would install.

use crate::domain::value_objects::{Ecosystem, InstallTarget};
use crate::error::FirewallResult;

/// Trait for package manager command adapters
///
/// Implementations:
/// - `PipCommand`: `pip` via `<python> -m pip`
/// - `NpmCommand`: `npm`
pub trait PackageManagerCommand: Send + Sync {
    /// Ecosystem this adapter handles
    fn ecosystem(&self) -> Ecosystem;

    /// Original command tokens, starting with the program name
    fn tokens(&self) -> &[String];

    /// Execute the original command with inherited stdio.
    ///
    /// Returns the package manager's exit code.
    fn run(&self) -> FirewallResult<i32>;

    /// Targets the command would install, without installing anything.
    ///
    /// Returns an empty list, and spawns nothing, when the command is not
    /// an install or already asks for help or a dry run.
    fn would_install(&self) -> FirewallResult<Vec<InstallTarget>>;
}

//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod ecosystem;
mod firewall_action;
mod install_target;
mod severity;
mod warn_policy;

pub use ecosystem::Ecosystem;
pub use firewall_action::{FirewallAction, ABORT_EXIT_CODE, BLOCK_EXIT_CODE};
pub use install_target::InstallTarget;
pub use severity::Severity;
pub use warn_policy::WarnPolicy;

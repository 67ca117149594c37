//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod confirmer;
pub mod firewall_logger;
pub mod package_manager;
pub mod process_runner;
pub mod verifier;

pub use confirmer::{Confirmer, DenyingConfirmer};
pub use firewall_logger::{FirewallLogger, LoggerError};
pub use package_manager::PackageManagerCommand;
pub use process_runner::{ProcessError, ProcessInvocation, ProcessRunner};
pub use verifier::{CompositeVerifier, Verifier, VerifierError};

//! scfw - a supply-chain firewall for pip and npm
//!
//! scfw sits in front of `pip install` and `npm install`. It asks the
//! package manager which exact packages a command would install, has a
//! verifier vet them, and only runs the real command when nothing is
//! flagged. Every run is logged exactly once.

pub mod application;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{RunOptions, RunOutcome, RunUseCase};
pub use config::Config;
pub use domain::value_objects::{Ecosystem, FirewallAction, InstallTarget, Severity, WarnPolicy};
pub use error::{FirewallError, FirewallResult};

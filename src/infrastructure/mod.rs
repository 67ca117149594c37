//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `process/` - Subprocess execution with Ctrl+C cancellation
//! - `package_managers/` - pip and npm command adapters
//! - `verifiers/` - Blocklist and external-program verifiers
//! - `loggers/` - Run loggers (tracing, JSON lines file)
//! - `confirm/` - Terminal confirmation prompt

pub mod confirm;
pub mod loggers;
pub mod logging;
pub mod package_managers;
pub mod process;
pub mod verifiers;

// Re-export for convenience
pub use confirm::{default_confirmer, InteractiveConfirmer};
pub use loggers::{JsonLinesLogger, TracingLogger};
pub use package_managers::{command_for, NpmCommand, PipCommand};
pub use process::SystemProcessRunner;
pub use verifiers::{BlocklistRule, BlocklistVerifier, ExternalVerifier};

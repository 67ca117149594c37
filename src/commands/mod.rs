//! Command entry points
//!
//! Each function backs one subcommand and returns the process exit code.

pub mod configure;
pub mod run;

pub use configure::{cmd_configure, STARTER_CONFIG};
pub use run::cmd_run;

//! Process Runner Implementations
//!
//! Provides the concrete `ProcessRunner` used outside of tests.

mod system;

pub use system::SystemProcessRunner;

//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, policies, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `RunUseCase` - Resolves, verifies and decides a package manager command, then runs it on allow

pub mod run;

pub use run::{RunOptions, RunOutcome, RunUseCase};

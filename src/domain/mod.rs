//! Domain Layer
//!
//! The firewall's rules, free of process and network I/O.
//!
//! ## Structure
//!
//! - `entities/` - Per-run records (Finding, RunRecord)
//! - `value_objects/` - Immutable value types (Ecosystem, InstallTarget, FirewallAction)
//! - `policies/` - Decision engine and run state machine
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never spawns processes or touches the network
//! 2. **Pure Functions** - The decision engine is stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod policies;
pub mod ports;
pub mod value_objects;

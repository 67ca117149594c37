//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting
//!
//! ## Structure
//!
//! - `cli` - Argument parsing and the package manager command split
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Outcome rendering
//!
//! ## Usage
//!
//! ```ignore
//! use scfw::presentation::factory;
//!
//! let runner = factory::create_runner();
//! let use_case = factory::create_run_use_case(&config, &runner);
//! let outcome = use_case.execute(command.as_ref(), &options);
//! ```

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{parse_command_line, Cli, Commands, Invocation, LogLevel};
pub use factory::create_run_use_case;
pub use output::OutcomeRenderer;

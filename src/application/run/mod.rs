//! Run Module
//!
//! Gates a package manager command behind resolution, verification and a
//! decision.
//!
//! ## Structure
//!
//! - `options` - Per-run options (`RunOptions`)
//! - `result` - Result type (`RunOutcome`)
//! - `dispatch` - Logger fan-out
//! - `use_case` - Core use case logic (`RunUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use scfw::application::run::{RunOptions, RunUseCase};
//!
//! let use_case = RunUseCase::new(verifier, loggers, confirmer);
//! let outcome = use_case.execute(command.as_ref(), &RunOptions::new());
//! ```

mod dispatch;
mod options;
mod result;
mod use_case;

pub use dispatch::dispatch;
pub use options::RunOptions;
pub use result::{RunOutcome, CANCELLED_EXIT_CODE, EXECUTION_FAILURE_EXIT_CODE};
pub use use_case::RunUseCase;

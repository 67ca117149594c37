//! Domain Entities
//!
//! Records produced during a single firewall run.
//! - `Finding` - A verifier's verdict about one install target
//! - `RunRecord` - Everything a logger is told about a finished run

mod finding;
mod run_record;

pub use finding::{normalize_findings, Finding};
pub use run_record::RunRecord;

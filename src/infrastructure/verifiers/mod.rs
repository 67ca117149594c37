//! Verifier Implementations

mod blocklist;
mod external;

pub use blocklist::{BlocklistRule, BlocklistVerifier};
pub use external::ExternalVerifier;

//! Confirmer Implementations

mod interactive;

pub use interactive::{default_confirmer, InteractiveConfirmer};

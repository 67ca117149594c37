//! Confirmer Port
//!
//! Asks the user whether to proceed when only warnings stand in the way.
//! Implementations can be interactive (prompting on a terminal) or fixed.

/// Trait for yes/no confirmation
pub trait Confirmer: Send + Sync {
    /// Returns true only on an explicit yes
    fn confirm(&self, prompt: &str) -> bool;
}

/// Confirmer that always refuses.
///
/// Used when stdin is not a terminal.
pub struct DenyingConfirmer;

impl Confirmer for DenyingConfirmer {
    fn confirm(&self, _prompt: &str) -> bool {
        false
    }
}

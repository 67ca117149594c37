//! Interactive Confirmer
//!
//! Prompts on stderr with a yes/no question. Anything other than an
//! explicit yes, including a failed read, counts as no.

use dialoguer::Confirm;
use is_terminal::IsTerminal;

use crate::domain::ports::{Confirmer, DenyingConfirmer};

/// Confirmer that asks the user on the terminal
pub struct InteractiveConfirmer;

impl Confirmer for InteractiveConfirmer {
    fn confirm(&self, prompt: &str) -> bool {
        match Confirm::new().with_prompt(prompt).default(false).interact() {
            Ok(answer) => answer,
            Err(e) => {
                tracing::debug!("confirmation prompt failed: {e}");
                false
            }
        }
    }
}

/// Interactive confirmer when stdin is a terminal, otherwise one that refuses
pub fn default_confirmer() -> Box<dyn Confirmer> {
    if std::io::stdin().is_terminal() {
        Box::new(InteractiveConfirmer)
    } else {
        Box::new(DenyingConfirmer)
    }
}

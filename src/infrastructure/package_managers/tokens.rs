//! Shallow command-line scanning shared by the adapters.
//!
//! Adapters only look deep enough into their tool's CLI to find the install
//! subcommand and to place the dry-run flag. Flags are detected by literal
//! presence anywhere in the token list, so an option *value* equal to
//! `--dry-run` also suppresses resolution.

use crate::domain::value_objects::Ecosystem;
use crate::error::{FirewallError, FirewallResult};

/// Flag that asks a package manager to simulate the install
pub const DRY_RUN_FLAG: &str = "--dry-run";

/// Tokens that make resolution meaningless
const SKIP_RESOLUTION_FLAGS: &[&str] = &["-h", "--help", DRY_RUN_FLAG];

/// Fail unless the first token is the ecosystem's program name
pub fn ensure_program(ecosystem: Ecosystem, tokens: &[String]) -> FirewallResult<()> {
    match tokens.first() {
        Some(first) if first == ecosystem.program() => Ok(()),
        Some(first) => Err(FirewallError::MalformedCommand(format!(
            "expected `{}`, found `{}`",
            ecosystem.program(),
            first
        ))),
        None => Err(FirewallError::MalformedCommand(format!(
            "empty command, expected `{}`",
            ecosystem.program()
        ))),
    }
}

/// Position of the install subcommand token, if resolution should happen.
///
/// `None` when no install token is present, or when help or a dry run
/// was already requested.
///
/// The scan is literal: an option value that happens to equal `--help`
/// or `--dry-run` also skips resolution.
pub fn install_position(tokens: &[String], install_words: &[&str]) -> Option<usize> {
    if tokens
        .iter()
        .any(|t| SKIP_RESOLUTION_FLAGS.contains(&t.as_str()))
    {
        return None;
    }

    tokens
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, t)| install_words.contains(&t.as_str()))
        .map(|(i, _)| i)
}

/// Copy of `tokens` with the dry-run flag right after the install token
pub fn with_dry_run(tokens: &[String], install_index: usize) -> Vec<String> {
    let split = (install_index + 1).min(tokens.len());
    let mut out = Vec::with_capacity(tokens.len() + 1);
    out.extend_from_slice(&tokens[..split]);
    out.push(DRY_RUN_FLAG.to_string());
    out.extend_from_slice(&tokens[split..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(s: &str) -> Vec<String> {
        s.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn ensure_program_checks_first_token() {
        assert!(ensure_program(Ecosystem::Pip, &toks("pip install x")).is_ok());
        assert!(matches!(
            ensure_program(Ecosystem::Pip, &toks("npm install x")),
            Err(FirewallError::MalformedCommand(_))
        ));
        assert!(ensure_program(Ecosystem::Npm, &[]).is_err());
    }

    #[test]
    fn install_position_finds_subcommand_after_global_options() {
        let tokens = toks("pip --quiet install -U requests");
        assert_eq!(install_position(&tokens, &["install"]), Some(2));
    }

    #[test]
    fn install_position_skips_help_and_dry_run() {
        assert_eq!(install_position(&toks("pip install --help"), &["install"]), None);
        assert_eq!(install_position(&toks("pip -h install x"), &["install"]), None);
        assert_eq!(
            install_position(&toks("pip install --dry-run x"), &["install"]),
            None
        );
    }

    #[test]
    fn install_position_none_without_install() {
        assert_eq!(install_position(&toks("pip list"), &["install"]), None);
        assert_eq!(install_position(&toks("pip"), &["install"]), None);
    }

    #[test]
    fn with_dry_run_inserts_after_install_token() {
        let tokens = toks("pip --isolated install -r req.txt six");
        assert_eq!(
            with_dry_run(&tokens, 2),
            toks("pip --isolated install --dry-run -r req.txt six")
        );
    }

    #[test]
    fn with_dry_run_appends_when_install_is_last() {
        assert_eq!(with_dry_run(&toks("npm i"), 1), toks("npm i --dry-run"));
    }
}

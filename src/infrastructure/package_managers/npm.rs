//! Npm Command Adapter
//!
//! Resolution runs `npm install --dry-run`, whose reify summary prints one
//! `add <name> <version>` line per package that would be placed, and
//! `change <name> <old> => <new>` for upgrades.

use std::sync::Arc;

use super::tokens::{ensure_program, install_position, with_dry_run};
use crate::domain::ports::{PackageManagerCommand, ProcessInvocation, ProcessRunner};
use crate::domain::value_objects::{Ecosystem, InstallTarget};
use crate::error::{FirewallError, FirewallResult};

/// `npm install` and the aliases npm accepts for it.
///
/// `ci`, `update`, `install-test`, `install-ci-test` and `exec` also install
/// packages but are not resolved here; they run unverified.
const INSTALL_WORDS: &[&str] = &[
    "install", "i", "add", "in", "ins", "inst", "insta", "instal", "isnt", "isnta", "isntal",
    "isntall",
];

const DEFAULT_NPM: &str = "npm";

/// Adapter for `npm` command lines
pub struct NpmCommand {
    tokens: Vec<String>,
    executable: String,
    install_index: Option<usize>,
    runner: Arc<dyn ProcessRunner>,
}

impl NpmCommand {
    /// Wrap an `npm ...` command line; `executable` defaults to `npm` on PATH
    pub fn new(
        tokens: Vec<String>,
        executable: Option<String>,
        runner: Arc<dyn ProcessRunner>,
    ) -> FirewallResult<Self> {
        ensure_program(Ecosystem::Npm, &tokens)?;
        let install_index = install_position(&tokens, INSTALL_WORDS);

        Ok(Self {
            tokens,
            executable: executable.unwrap_or_else(|| DEFAULT_NPM.to_string()),
            install_index,
            runner,
        })
    }

    pub fn invocation(&self) -> ProcessInvocation {
        ProcessInvocation::new(&self.executable, self.tokens[1..].to_vec())
    }

    pub fn dry_run_invocation(&self) -> Option<ProcessInvocation> {
        let index = self.install_index?;
        let tokens = with_dry_run(&self.tokens, index);
        Some(ProcessInvocation::new(&self.executable, tokens[1..].to_vec()))
    }
}

impl PackageManagerCommand for NpmCommand {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Npm
    }

    fn tokens(&self) -> &[String] {
        &self.tokens
    }

    fn run(&self) -> FirewallResult<i32> {
        let invocation = self.invocation();
        self.runner
            .run(&invocation)
            .map_err(|source| FirewallError::Execution {
                command: invocation.display(),
                source,
            })
    }

    fn would_install(&self) -> FirewallResult<Vec<InstallTarget>> {
        let Some(probe) = self.dry_run_invocation() else {
            return Ok(Vec::new());
        };

        let stdout = self
            .runner
            .capture(&probe)
            .map_err(|source| FirewallError::DryRunExecutionFailure {
                command: probe.display(),
                source,
            })?;

        parse_dry_run_report(&stdout)
    }
}

/// Parse npm's dry-run summary into install targets, in output order
pub fn parse_dry_run_report(stdout: &str) -> FirewallResult<Vec<InstallTarget>> {
    let mut targets = Vec::new();

    for line in stdout.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.as_slice() {
            ["add", name, version] => {
                targets.push(InstallTarget::new(Ecosystem::Npm, *name, *version)?);
            }
            ["change", name, _from, "=>", to] => {
                targets.push(InstallTarget::new(Ecosystem::Npm, *name, *to)?);
            }
            ["add", ..] | ["change", ..] => {
                return Err(FirewallError::target_parse(
                    line.trim(),
                    "expected `add <name> <version>` or `change <name> <old> => <new>`",
                ));
            }
            _ => {}
        }
    }

    Ok(targets)
}

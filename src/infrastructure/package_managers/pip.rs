//! Pip Command Adapter
//!
//! Runs pip as `<python> -m pip ...` so that the interpreter (and thus the
//! environment) is explicit. Resolution uses `pip install --dry-run` and
//! reads its `Would install ...` line.

use std::path::PathBuf;
use std::sync::Arc;

use super::tokens::{ensure_program, install_position, with_dry_run};
use crate::domain::ports::{PackageManagerCommand, ProcessInvocation, ProcessRunner};
use crate::domain::value_objects::{Ecosystem, InstallTarget};
use crate::error::{FirewallError, FirewallResult};

/// Marker that starts pip's dry-run report line
pub const WOULD_INSTALL_MARKER: &str = "Would install";

const INSTALL_WORDS: &[&str] = &["install"];

/// Interpreter used when none is given and no virtualenv is active
const DEFAULT_PYTHON: &str = "python3";

/// Adapter for `pip` command lines
pub struct PipCommand {
    tokens: Vec<String>,
    executable: String,
    install_index: Option<usize>,
    runner: Arc<dyn ProcessRunner>,
}

impl PipCommand {
    /// Wrap a `pip ...` command line.
    ///
    /// `executable` is the Python interpreter to run pip with; it defaults
    /// to the active virtualenv's interpreter, then `python3`.
    pub fn new(
        tokens: Vec<String>,
        executable: Option<String>,
        runner: Arc<dyn ProcessRunner>,
    ) -> FirewallResult<Self> {
        ensure_program(Ecosystem::Pip, &tokens)?;
        let install_index = install_position(&tokens, INSTALL_WORDS);
        let executable = executable.unwrap_or_else(default_python);

        Ok(Self {
            tokens,
            executable,
            install_index,
            runner,
        })
    }

    /// The real invocation: `<python> -m pip ...`
    pub fn invocation(&self) -> ProcessInvocation {
        let mut args = vec!["-m".to_string()];
        args.extend(self.tokens.iter().cloned());
        ProcessInvocation::new(&self.executable, args)
    }

    /// The dry-run probe, or `None` if the command needs no resolution
    pub fn dry_run_invocation(&self) -> Option<ProcessInvocation> {
        let index = self.install_index?;
        let mut args = vec!["-m".to_string()];
        args.extend(with_dry_run(&self.tokens, index));
        Some(ProcessInvocation::new(&self.executable, args))
    }
}

impl PackageManagerCommand for PipCommand {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Pip
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

/// Parse pip's dry-run output into install targets.
///
/// Only the first `Would install` line counts. Any entry that cannot be
/// split into name and version fails the whole report.
pub fn parse_dry_run_report(stdout: &str) -> FirewallResult<Vec<InstallTarget>> {
    for line in stdout.lines() {
        if let Some(entries) = line.strip_prefix(WOULD_INSTALL_MARKER) {
            return entries
                .split_whitespace()
                .map(InstallTarget::parse_pip)
                .collect();
        }
    }

    Ok(Vec::new())
}

fn default_python() -> String {
    if let Some(venv) = std::env::var_os("VIRTUAL_ENV").filter(|v| !v.is_empty()) {
        let python = if cfg!(windows) {
            PathBuf::from(venv).join("Scripts").join("python.exe")
        } else {
            PathBuf::from(venv).join("bin").join("python")
        };
        return python.to_string_lossy().into_owned();
    }

    DEFAULT_PYTHON.to_string()
}

//! Process Runner Port
//!
//! Abstracts subprocess execution so that adapters and verifiers can be
//! exercised without spawning real package managers.

use thiserror::Error;

/// A program invocation: program path, arguments and optional stdin payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessInvocation {
    pub program: String,
    pub args: Vec<String>,
    pub stdin: Option<String>,
}

impl ProcessInvocation {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            stdin: None,
        }
    }

    pub fn with_stdin(mut self, input: impl Into<String>) -> Self {
        self.stdin = Some(input.into());
        self
    }

    /// Shell-like rendering for messages
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Error from a subprocess
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProcessError {
    /// The program could not be started
    #[error("could not start `{program}`: {message}")]
    Spawn { program: String, message: String },

    /// The program ran but exited abnormally
    #[error("exited with {}{}", describe_status(.status), describe_stderr(.stderr))]
    Failed { status: Option<i32>, stderr: String },

    /// Interrupted by the user; the child was killed and reaped
    #[error("interrupted")]
    Cancelled,

    /// I/O failure while talking to the child
    #[error("I/O error: {0}")]
    Io(String),
}

fn describe_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("status {code}"),
        None => "a signal".to_string(),
    }
}

fn describe_stderr(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {trimmed}")
    }
}

/// Trait for running subprocesses
///
/// Implementations:
/// - `SystemProcessRunner`: real processes, cancellable via Ctrl+C
/// - test doubles recording every invocation
pub trait ProcessRunner: Send + Sync {
    /// Run to completion with piped stdio and return stdout.
    ///
    /// A non-zero exit is reported as `ProcessError::Failed`.
    fn capture(&self, invocation: &ProcessInvocation) -> Result<String, ProcessError>;

    /// Run with inherited stdio and return the exit code.
    fn run(&self, invocation: &ProcessInvocation) -> Result<i32, ProcessError>;

    /// Whether the user asked the current run to stop
    fn is_cancelled(&self) -> bool {
        false
    }
}

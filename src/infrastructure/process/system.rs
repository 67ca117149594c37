//! System Process Runner
//!
//! Runs real subprocesses with `std::process::Command`. Captured runs poll
//! the child so that a Ctrl+C can kill and reap it instead of leaving it
//! orphaned. On unix a captured child leads its own process group, and a
//! cancel kills the whole group, so helpers it spawned (pip building sdist
//! metadata, npm running git) go down with it.

use std::io::{Read, Write};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::domain::ports::{ProcessError, ProcessInvocation, ProcessRunner};

/// How often a captured child is checked for exit or cancellation
const POLL_INTERVAL: Duration = Duration::from_millis(25);

type ReaderHandle = JoinHandle<std::io::Result<String>>;

/// Process runner backed by the operating system
pub struct SystemProcessRunner {
    cancelled: Arc<AtomicBool>,
}

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Share an existing cancellation flag
    pub fn with_cancellation(cancelled: Arc<AtomicBool>) -> Self {
        Self { cancelled }
    }

    /// Flag set when the user interrupts the run
    pub fn cancellation_flag(&self) -> Arc<AtomicBool> {
        self.cancelled.clone()
    }

    /// Route Ctrl+C to the cancellation flag instead of killing the firewall.
    ///
    /// May only be called once per process.
    pub fn install_interrupt_handler(&self) -> Result<(), ctrlc::Error> {
        let flag = self.cancelled.clone();
        ctrlc::set_handler(move || {
            flag.store(true, Ordering::SeqCst);
        })
    }

    fn spawn_piped(&self, invocation: &ProcessInvocation) -> Result<Child, ProcessError> {
        let stdin = if invocation.stdin.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        };

        let mut command = Command::new(&invocation.program);
        command
            .args(&invocation.args)
            .stdin(stdin)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            command.process_group(0);
        }

        command.spawn().map_err(|e| ProcessError::Spawn {
            program: invocation.program.clone(),
            message: e.to_string(),
        })
    }

    /// Wait for the child, killing and reaping it if the run is cancelled
    fn wait_cancellable(&self, child: &mut Child) -> Result<ExitStatus, ProcessError> {
        loop {
            match child.try_wait() {
                Ok(Some(status)) => return Ok(status),
                Ok(None) => {
                    if self.is_cancelled() {
                        tracing::debug!(pid = child.id(), "killing child after interrupt");
                        kill_process_group(child);
                        return Err(ProcessError::Cancelled);
                    }
                    thread::sleep(POLL_INTERVAL);
                }
                Err(e) => {
                    kill_process_group(child);
                    return Err(ProcessError::Io(e.to_string()));
                }
            }
        }
    }
}

impl Default for SystemProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessRunner for SystemProcessRunner {
    fn capture(&self, invocation: &ProcessInvocation) -> Result<String, ProcessError> {
        if self.is_cancelled() {
            return Err(ProcessError::Cancelled);
        }

        tracing::debug!(command = %invocation.display(), "capturing subprocess output");
        let mut child = self.spawn_piped(invocation)?;

        // Pipes are drained on their own threads so a chatty child never
        // blocks on a full buffer while we poll it.
        let writer = match (child.stdin.take(), invocation.stdin.clone()) {
            (Some(mut pipe), Some(input)) => Some(thread::spawn(move || {
                let _ = pipe.write_all(input.as_bytes());
            })),
            _ => None,
        };
        let stdout = child.stdout.take().map(spawn_reader);
        let stderr = child.stderr.take().map(spawn_reader);

        let status = self.wait_cancellable(&mut child);

        // A descendant that escaped the group can hold the pipes open
        // forever; after a kill the readers are left to finish on their own.
        if matches!(status, Err(ProcessError::Cancelled)) {
            return Err(ProcessError::Cancelled);
        }

        if let Some(writer) = writer {
            let _ = writer.join();
        }
        let stdout = join_reader(stdout);
        let stderr = join_reader(stderr);

        let status = status?;
        if !status.success() {
            return Err(ProcessError::Failed {
                status: status.code(),
                stderr: stderr.unwrap_or_default(),
            });
        }

        stdout
    }

    fn run(&self, invocation: &ProcessInvocation) -> Result<i32, ProcessError> {
        if self.is_cancelled() {
            return Err(ProcessError::Cancelled);
        }

        tracing::debug!(command = %invocation.display(), "running subprocess");
        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| ProcessError::Spawn {
                program: invocation.program.clone(),
                message: e.to_string(),
            })?;

        Ok(exit_code(status))
    }

    fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Kill `child` and everything in its process group, then reap it.
///
/// The group is signalled through the shell's `kill` builtin; if that
/// fails the child alone is killed.
fn kill_process_group(child: &mut Child) {
    #[cfg(unix)]
    {
        let pgid = child.id().to_string();
        let signalled = Command::new("sh")
            .args(["-c", "kill -s KILL -- \"-$1\"", "scfw-kill", &pgid])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false);
        if !signalled {
            let _ = child.kill();
        }
    }

    #[cfg(not(unix))]
    {
        let _ = child.kill();
    }

    let _ = child.wait();
}

fn spawn_reader<R: Read + Send + 'static>(mut pipe: R) -> ReaderHandle {
    thread::spawn(move || {
        let mut buf = String::new();
        pipe.read_to_string(&mut buf)?;
        Ok(buf)
    })
}

fn join_reader(handle: Option<ReaderHandle>) -> Result<String, ProcessError> {
    match handle {
        None => Ok(String::new()),
        Some(handle) => handle
            .join()
            .map_err(|_| ProcessError::Io("output reader panicked".to_string()))?
            .map_err(|e| ProcessError::Io(e.to_string())),
    }
}

/// Exit code of a finished child, following the shell's `128 + signal` rule
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}

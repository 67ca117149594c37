//! Test double for the process boundary shared by adapter tests.

use std::sync::{Arc, Mutex};

use crate::domain::ports::{ProcessError, ProcessInvocation, ProcessRunner};

/// Runner that replays a canned dry-run result and records invocations
pub struct ScriptedRunner {
    pub stdout: Result<String, ProcessError>,
    pub captured: Mutex<Vec<ProcessInvocation>>,
    pub ran: Mutex<Vec<ProcessInvocation>>,
}

impl ScriptedRunner {
    pub fn new(stdout: &str) -> Arc<Self> {
        Arc::new(Self {
            stdout: Ok(stdout.to_string()),
            captured: Mutex::new(Vec::new()),
            ran: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(err: ProcessError) -> Arc<Self> {
        Arc::new(Self {
            stdout: Err(err),
            captured: Mutex::new(Vec::new()),
            ran: Mutex::new(Vec::new()),
        })
    }

    pub fn capture_count(&self) -> usize {
        self.captured.lock().unwrap().len()
    }
}

impl ProcessRunner for ScriptedRunner {
    fn capture(&self, invocation: &ProcessInvocation) -> Result<String, ProcessError> {
        self.captured.lock().unwrap().push(invocation.clone());
        self.stdout.clone()
    }

    fn run(&self, invocation: &ProcessInvocation) -> Result<i32, ProcessError> {
        self.ran.lock().unwrap().push(invocation.clone());
        Ok(0)
    }
}

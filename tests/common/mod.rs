//! Common test utilities for scfw CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated config/home directories plus helpers to run `scfw`
//! - Fake package managers: shell scripts standing in for `python -m pip`
//!   and `npm`, recording every real (non-probe) invocation

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Environment variables the firewall reads; cleared for every run
const SCRUBBED_ENV: &[&str] = &[
    "SCFW_CONFIG",
    "SCFW_ON_WARN",
    "SCFW_LOG_FILE",
    "SCFW_VERIFIER_COMMAND",
    "RUST_LOG",
    "VIRTUAL_ENV",
];

/// Result of running the scfw binary
#[derive(Debug)]
pub struct TestResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Isolated test environment
pub struct TestEnv {
    pub root: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// File the fake package managers append their real invocations to
    pub fn run_log(&self) -> PathBuf {
        self.path("ran.log")
    }

    /// Lines recorded by real (non-probe) package manager runs
    pub fn real_runs(&self) -> Vec<String> {
        fs::read_to_string(self.run_log())
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let home = self.path("home");
        fs::create_dir_all(&home).expect("Failed to create home");

        let mut cmd = Command::new(env!("CARGO_BIN_EXE_scfw"));
        cmd.current_dir(self.root.path())
            .args(args)
            .env("HOME", &home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .env("NO_COLOR", "1")
            .env("FAKE_RUN_LOG", self.run_log());
        for key in SCRUBBED_ENV {
            cmd.env_remove(key);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute scfw");
        TestResult {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Write an executable script standing in for the Python interpreter.
    ///
    /// Probes (any invocation containing `--dry-run`) print `report` and
    /// exit with `probe_status`; real runs are recorded and exit with
    /// `run_status`.
    #[cfg(unix)]
    pub fn fake_python(&self, report: &str, probe_status: i32, run_status: i32) -> PathBuf {
        self.fake_script("bin/python", report, probe_status, run_status)
    }

    /// Same as `fake_python`, for the npm binary
    #[cfg(unix)]
    pub fn fake_npm(&self, report: &str, probe_status: i32, run_status: i32) -> PathBuf {
        self.fake_script("bin/npm", report, probe_status, run_status)
    }

    #[cfg(unix)]
    fn fake_script(&self, name: &str, report: &str, probe_status: i32, run_status: i32) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let script = format!(
            r#"#!/bin/sh
for arg in "$@"; do
  if [ "$arg" = "--dry-run" ]; then
    cat <<'REPORT'
{report}
REPORT
    exit {probe_status}
  fi
done
echo "$*" >> "$FAKE_RUN_LOG"
exit {run_status}
"#
        );
        let path = self.write_file(name, &script);
        let mut perms = fs::metadata(&path).expect("stat script").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("chmod script");
        path
    }
}

pub fn path_str(path: &Path) -> &str {
    path.to_str().expect("temp paths are UTF-8")
}

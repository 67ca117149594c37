//! JSON Lines Logger
//!
//! Appends one NDJSON record per run to a file. Several firewall
//! processes may share the file, so each append holds an exclusive lock.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use fs2::FileExt;

use crate::domain::entities::RunRecord;
use crate::domain::ports::{FirewallLogger, LoggerError};

/// Logger writing NDJSON records to a file
pub struct JsonLinesLogger {
    path: PathBuf,
    hostname: String,
}

impl JsonLinesLogger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            hostname: hostname(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn to_json(&self, record: &RunRecord) -> serde_json::Value {
        serde_json::json!({
            "timestamp": Utc::now().to_rfc3339(),
            "hostname": self.hostname,
            "version": env!("CARGO_PKG_VERSION"),
            "action": record.action,
            "ecosystem": record.ecosystem,
            "command": record.command_line(),
            "targets": record.targets,
            "reason": record.reason,
            "message": record.message(),
        })
    }
}

impl FirewallLogger for JsonLinesLogger {
    fn name(&self) -> &str {
        "json_file"
    }

    fn log(&self, record: &RunRecord) -> Result<(), LoggerError> {
        let line = serde_json::to_string(&self.to_json(record))
            .map_err(|e| LoggerError::Serialization(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| LoggerError::Io(e.to_string()))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| LoggerError::Io(format!("{}: {e}", self.path.display())))?;

        file.lock_exclusive()
            .map_err(|e| LoggerError::Io(e.to_string()))?;
        let written = writeln!(file, "{line}").and_then(|_| file.flush());
        let _ = FileExt::unlock(&file);

        written.map_err(|e| LoggerError::Io(e.to_string()))
    }
}

/// Best-effort host name for log records
fn hostname() -> String {
    if let Some(name) = std::env::var("HOSTNAME")
        .ok()
        .map(|h| h.trim().to_string())
        .filter(|h| !h.is_empty())
    {
        return name;
    }

    fs::read_to_string("/etc/hostname")
        .ok()
        .map(|h| h.trim().to_string())
        .filter(|h| !h.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

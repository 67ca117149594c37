//! Configure command - write a starter configuration file

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::{default_config_path, CONFIG_ENV};

/// Commented starter configuration; parses to the built-in defaults
pub const STARTER_CONFIG: &str = r#"# scfw configuration
#
# Environment variables override this file:
#   SCFW_ON_WARN, SCFW_LOG_FILE, SCFW_VERIFIER_COMMAND

[policy]
# What to do when a package only has warnings: "block", "prompt" or "allow"
on_warn = "block"

[verifier]
# External verifier: receives the targets as JSON on stdin and prints a
# JSON array of findings on stdout.
# command = ["osv-check", "--json"]

# Packages to flag. Leave `versions` empty to match every version.
# [[verifier.blocklist]]
# ecosystem = "npm"
# package = "event-stream"
# versions = ["3.3.6"]
# severity = "block"
# detail = "compromised release"

[logging]
# Append one JSON line per run to this file
# json_file = "/var/log/scfw.jsonl"
"#;

/// Where `configure` writes: `--config`, then `SCFW_CONFIG`, then the user config dir
fn target_path(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()).map(PathBuf::from))
        .or_else(default_config_path)
}

/// Write the starter configuration unless one exists (or `force` is set)
pub fn cmd_configure(explicit: Option<&Path>, force: bool) -> Result<PathBuf> {
    let path = target_path(explicit).context("could not determine a configuration directory")?;

    if path.exists() && !force {
        println!(
            "Configuration already exists at {} (use --force to overwrite)",
            path.display()
        );
        return Ok(path);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    fs::write(&path, STARTER_CONFIG).with_context(|| format!("writing {}", path.display()))?;

    println!("Wrote starter configuration to {}", path.display());
    Ok(path)
}

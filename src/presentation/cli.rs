//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--log-level, --config) are inherited by all subcommands
//! - The package manager command is split off before clap sees the
//!   arguments: everything from the first `pip`/`npm` token onwards is
//!   passed through verbatim, so its flags never clash with ours

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};

use crate::domain::value_objects::Ecosystem;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// scfw - a supply-chain firewall for pip and npm
#[derive(Parser, Debug)]
#[command(name = "scfw")]
#[command(version, long_about = None)]
#[command(after_help = "Example: scfw run pip install requests")]
pub struct Cli {
    /// Diagnostic log level (RUST_LOG takes precedence)
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Configuration file (defaults to SCFW_CONFIG, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a starter configuration file
    Configure {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Verify a package manager command and run it if it is allowed
    Run {
        /// Verify and report, but do not run the command
        #[arg(long)]
        dry_run: bool,

        /// Interpreter (pip) or npm binary to run the command with
        #[arg(long, value_name = "PATH")]
        executable: Option<String>,

        /// Package manager command, starting with `pip` or `npm`
        #[arg(value_name = "COMMAND", trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },
}

/// Parsed command line: firewall options plus the passthrough command
#[derive(Debug)]
pub struct Invocation {
    pub cli: Cli,
    /// Package manager tokens, verbatim; empty for `configure`
    pub package_command: Vec<String>,
}

/// Index of the first package manager token, never the binary name itself
pub fn hinge_position(args: &[String]) -> Option<usize> {
    let rest = args.get(1..)?;
    Ecosystem::find_program(rest).map(|i| i + 1)
}

/// Parse `argv` (including the binary name).
///
/// Returns clap errors for usage problems, so callers can `exit()` with
/// clap's status code.
pub fn parse_command_line<I, T>(args: I) -> Result<Invocation, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let mut args: Vec<String> = args.into_iter().map(Into::into).collect();
    let package_command = match hinge_position(&args) {
        Some(index) => args.split_off(index),
        None => Vec::new(),
    };

    let cli = Cli::try_parse_from(&args)?;

    match &cli.command {
        Commands::Run { command, .. } => {
            if let Some(first) = command.first() {
                return Err(Cli::command().error(
                    ErrorKind::InvalidValue,
                    format!("unsupported package manager '{first}' (expected pip or npm)"),
                ));
            }
            if package_command.is_empty() {
                return Err(Cli::command().error(
                    ErrorKind::MissingRequiredArgument,
                    "the following required arguments were not provided:\n  <COMMAND>...",
                ));
            }
        }
        Commands::Configure { .. } => {
            if !package_command.is_empty() {
                return Err(Cli::command().error(
                    ErrorKind::UnknownArgument,
                    format!(
                        "'configure' does not take a package manager command (found '{}')",
                        package_command.join(" ")
                    ),
                ));
            }
        }
    }

    Ok(Invocation {
        cli,
        package_command,
    })
}

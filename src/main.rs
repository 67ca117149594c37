//! scfw CLI - supply-chain firewall for pip and npm
//!
//! Usage: scfw [--log-level LEVEL] [--config PATH] <COMMAND>
//!
//! Commands:
//!   run        Verify a pip/npm command and run it if it is allowed
//!   configure  Write a starter configuration file

use scfw::commands::{cmd_configure, cmd_run};
use scfw::infrastructure::logging::init_logging;
use scfw::presentation::{parse_command_line, Commands};

fn main() {
    let args = std::env::args_os().map(|a| a.to_string_lossy().into_owned());
    let invocation = match parse_command_line(args) {
        Ok(invocation) => invocation,
        Err(e) => e.exit(),
    };

    let cli = invocation.cli;
    init_logging(cli.log_level.as_str());

    let code = match cli.command {
        Commands::Configure { force } => match cmd_configure(cli.config.as_deref(), force) {
            Ok(_) => 0,
            Err(e) => {
                eprintln!("Error: {e:#}");
                1
            }
        },
        Commands::Run {
            dry_run,
            executable,
            ..
        } => cmd_run(
            cli.config.as_deref(),
            invocation.package_command,
            dry_run,
            executable,
        ),
    };

    std::process::exit(code);
}

//! Run command - gate a pip/npm command behind the firewall

use std::path::Path;

use crate::application::RunOptions;
use crate::config::{load_effective, with_env_overrides, Config};
use crate::domain::value_objects::{Ecosystem, ABORT_EXIT_CODE};
use crate::error::FirewallError;
use crate::presentation::factory;
use crate::presentation::output::{stderr_supports_color, OutcomeRenderer};

/// Verify `tokens` and run them if allowed. Returns the exit code.
///
/// Failures before the run starts (unreadable config, unusable command)
/// still go through the use case, so every logger sees the abort. A broken
/// config file falls back to the defaults plus environment overrides for
/// that purpose.
pub fn cmd_run(
    config_path: Option<&Path>,
    tokens: Vec<String>,
    dry_run: bool,
    executable: Option<String>,
) -> i32 {
    let command_line = tokens.join(" ");
    let renderer = OutcomeRenderer::new(stderr_supports_color());

    let Some(ecosystem) = tokens.first().and_then(|p| Ecosystem::from_program(p)) else {
        eprintln!(
            "{}",
            renderer.abort_message(&command_line, "not a pip or npm command")
        );
        return ABORT_EXIT_CODE;
    };

    let (config, config_error) = match load_effective(config_path) {
        Ok((config, warnings)) => {
            for warning in &warnings {
                tracing::warn!("{warning}");
            }
            (config, None)
        }
        Err(e) => (with_env_overrides(Config::default()), Some(e)),
    };

    let runner = factory::create_runner();
    if let Err(e) = runner.install_interrupt_handler() {
        tracing::debug!("could not install Ctrl+C handler: {e}");
    }
    let use_case = factory::create_run_use_case(&config, &runner);

    let outcome = match config_error {
        Some(e) => use_case.abort_unstarted(
            ecosystem,
            &tokens,
            FirewallError::Configuration(e.to_string()),
        ),
        None => match factory::create_command(tokens.clone(), executable, &runner) {
            Ok(command) => {
                let options = RunOptions::new()
                    .with_dry_run(dry_run)
                    .with_warn_policy(config.policy.on_warn);
                use_case.execute(command.as_ref(), &options)
            }
            Err(e) => use_case.abort_unstarted(ecosystem, &tokens, e),
        },
    };

    eprint!("{}", renderer.render(&outcome, &command_line, dry_run));
    outcome.exit_code
}

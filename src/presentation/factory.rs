//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::sync::Arc;

use crate::application::RunUseCase;
use crate::config::Config;
use crate::domain::ports::{
    CompositeVerifier, Confirmer, FirewallLogger, PackageManagerCommand, ProcessRunner, Verifier,
};
use crate::error::FirewallResult;
use crate::infrastructure::{
    command_for, default_confirmer, BlocklistVerifier, ExternalVerifier, JsonLinesLogger,
    SystemProcessRunner, TracingLogger,
};

/// Create the process runner shared by adapters and verifiers
pub fn create_runner() -> Arc<SystemProcessRunner> {
    Arc::new(SystemProcessRunner::new())
}

/// Create the verifier chain described by `config`.
///
/// The blocklist always runs first; the external verifier is added when a
/// command is configured.
pub fn create_verifier(config: &Config, runner: Arc<dyn ProcessRunner>) -> CompositeVerifier {
    let mut verifiers: Vec<Box<dyn Verifier>> = vec![Box::new(BlocklistVerifier::new(
        config.verifier.blocklist.clone(),
    ))];

    if let Some(external) = ExternalVerifier::from_command(&config.verifier.command, runner) {
        verifiers.push(Box::new(external));
    }

    CompositeVerifier::new(verifiers)
}

/// Create the run loggers described by `config`
pub fn create_loggers(config: &Config) -> Vec<Box<dyn FirewallLogger>> {
    let mut loggers: Vec<Box<dyn FirewallLogger>> = vec![Box::new(TracingLogger)];
    if let Some(path) = &config.logging.json_file {
        loggers.push(Box::new(JsonLinesLogger::new(path)));
    }
    loggers
}

/// Create a run use case with all dependencies wired up
pub fn create_run_use_case(config: &Config, runner: &Arc<SystemProcessRunner>) -> RunUseCase {
    create_run_use_case_with_confirmer(config, runner, default_confirmer())
}

/// Create a run use case with a specific confirmer
pub fn create_run_use_case_with_confirmer(
    config: &Config,
    runner: &Arc<SystemProcessRunner>,
    confirmer: Box<dyn Confirmer>,
) -> RunUseCase {
    if config.verifier.blocklist.is_empty() && config.verifier.command.is_empty() {
        tracing::warn!("no verifier configured; every install will be allowed (see `scfw configure`)");
    }

    let verifier = create_verifier(config, runner.clone());
    RunUseCase::new(Box::new(verifier), create_loggers(config), confirmer)
        .with_cancellation(runner.cancellation_flag())
}

/// Create the package manager adapter for a command line
pub fn create_command(
    tokens: Vec<String>,
    executable: Option<String>,
    runner: &Arc<SystemProcessRunner>,
) -> FirewallResult<Box<dyn PackageManagerCommand>> {
    command_for(tokens, executable, runner.clone())
}

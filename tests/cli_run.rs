//! End-to-end tests for `scfw run` against fake package managers.

#![cfg(unix)]

mod common;

use common::{path_str, TestEnv};
use scfw::domain::value_objects::{ABORT_EXIT_CODE, BLOCK_EXIT_CODE};

const BLOCKLIST: &str = r#"
[[verifier.blocklist]]
ecosystem = "pip"
package = "evil-pkg"
detail = "known credential stealer"

[[verifier.blocklist]]
ecosystem = "npm"
package = "left-pad"
versions = ["1.3.0"]
severity = "warn"
detail = "unpublished upstream"
"#;

#[test]
fn clean_install_runs_and_propagates_status() {
    let env = TestEnv::new();
    let python = env.fake_python("Would install requests-2.31.0 idna-3.6", 0, 0);

    let result = env.run(&[
        "run",
        "--executable",
        path_str(&python),
        "pip",
        "install",
        "requests",
    ]);

    assert_eq!(result.exit_code, 0, "stderr:\n{}", result.stderr);
    assert_eq!(env.real_runs(), vec!["-m pip install requests"]);
}

#[test]
fn package_manager_exit_status_is_returned() {
    let env = TestEnv::new();
    let python = env.fake_python("Would install six-1.16.0", 0, 7);

    let result = env.run(&["run", "--executable", path_str(&python), "pip", "install", "six"]);

    assert_eq!(result.exit_code, 7);
    assert_eq!(env.real_runs().len(), 1);
}

#[test]
fn blocklisted_package_is_blocked_and_never_installed() {
    let env = TestEnv::new();
    let config = env.write_file("scfw.toml", BLOCKLIST);
    let python = env.fake_python("Would install evil-pkg-1.0 requests-2.31.0", 0, 0);

    let result = env.run(&[
        "--config",
        path_str(&config),
        "run",
        "--executable",
        path_str(&python),
        "pip",
        "install",
        "evil-pkg",
        "requests",
    ]);

    assert_eq!(result.exit_code, BLOCK_EXIT_CODE, "stderr:\n{}", result.stderr);
    assert!(result.stderr.contains("evil-pkg-1.0 [block]: known credential stealer"));
    assert!(result
        .stderr
        .contains("Command 'pip install evil-pkg requests' was blocked"));
    assert!(env.real_runs().is_empty());
}

#[test]
fn help_passes_through_without_probe() {
    let env = TestEnv::new();
    // A probe would fail the run, so reaching the real command proves none ran.
    let python = env.fake_python("", 1, 0);

    let result = env.run(&[
        "run",
        "--executable",
        path_str(&python),
        "pip",
        "install",
        "--help",
    ]);

    assert_eq!(result.exit_code, 0, "stderr:\n{}", result.stderr);
    assert_eq!(env.real_runs(), vec!["-m pip install --help"]);
}

#[test]
fn failing_probe_aborts() {
    let env = TestEnv::new();
    let python = env.fake_python("ERROR: No matching distribution found", 1, 0);

    let result = env.run(&[
        "run",
        "--executable",
        path_str(&python),
        "pip",
        "install",
        "does-not-exist",
    ]);

    assert_eq!(result.exit_code, ABORT_EXIT_CODE);
    assert!(result
        .stderr
        .contains("Command 'pip install does-not-exist' was aborted"));
    assert!(env.real_runs().is_empty());
}

#[test]
fn firewall_dry_run_verifies_without_running() {
    let env = TestEnv::new();
    let npm = env.fake_npm("add is-odd 3.0.1\nadd is-number 6.0.0", 0, 0);

    let result = env.run(&[
        "run",
        "--dry-run",
        "--executable",
        path_str(&npm),
        "npm",
        "install",
        "is-odd",
    ]);

    assert_eq!(result.exit_code, 0, "stderr:\n{}", result.stderr);
    assert!(result
        .stderr
        .contains("Command 'npm install is-odd' would be allowed (2 packages verified)"));
    assert!(env.real_runs().is_empty());
}

#[test]
fn warnings_block_without_a_terminal_to_prompt() {
    let env = TestEnv::new();
    let config = env.write_file("scfw.toml", BLOCKLIST);
    let npm = env.fake_npm("add left-pad 1.3.0", 0, 0);

    let result = env.run_with_env(
        &["run", "--executable", path_str(&npm), "npm", "i", "left-pad"],
        &[("SCFW_CONFIG", path_str(&config)), ("SCFW_ON_WARN", "prompt")],
    );

    assert_eq!(result.exit_code, BLOCK_EXIT_CODE, "stderr:\n{}", result.stderr);
    assert!(env.real_runs().is_empty());
}

#[test]
fn warnings_can_be_allowed_by_policy() {
    let env = TestEnv::new();
    let config = env.write_file("scfw.toml", BLOCKLIST);
    let npm = env.fake_npm("add left-pad 1.3.0", 0, 0);

    let result = env.run_with_env(
        &["run", "--executable", path_str(&npm), "npm", "i", "left-pad"],
        &[("SCFW_CONFIG", path_str(&config)), ("SCFW_ON_WARN", "allow")],
    );

    assert_eq!(result.exit_code, 0, "stderr:\n{}", result.stderr);
    assert!(result.stderr.contains("left-pad@1.3.0 [warn]: unpublished upstream"));
    assert_eq!(env.real_runs(), vec!["i left-pad"]);
}

#[test]
fn every_run_appends_one_json_record() {
    let env = TestEnv::new();
    let config = env.write_file("scfw.toml", BLOCKLIST);
    let log_file = env.path("logs/scfw.jsonl");
    let python = env.fake_python("Would install evil-pkg-1.0", 0, 0);

    let result = env.run_with_env(
        &[
            "--config",
            path_str(&config),
            "run",
            "--executable",
            path_str(&python),
            "pip",
            "install",
            "evil-pkg",
        ],
        &[("SCFW_LOG_FILE", path_str(&log_file))],
    );
    assert_eq!(result.exit_code, BLOCK_EXIT_CODE);

    let content = std::fs::read_to_string(&log_file).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 1);

    let record: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(record["action"], "block");
    assert_eq!(record["ecosystem"], "pip");
    assert_eq!(record["command"], "pip install evil-pkg");
    assert_eq!(record["targets"][0]["package"], "evil-pkg");
    assert_eq!(record["targets"][0]["version"], "1.0");
}

#[test]
fn unwritable_log_file_does_not_change_outcome() {
    let env = TestEnv::new();
    let python = env.fake_python("Would install six-1.16.0", 0, 0);
    // A directory cannot be opened for appending.
    let log_dir = env.path("logdir");
    std::fs::create_dir_all(&log_dir).unwrap();

    let result = env.run_with_env(
        &["run", "--executable", path_str(&python), "pip", "install", "six"],
        &[("SCFW_LOG_FILE", path_str(&log_dir))],
    );

    assert_eq!(result.exit_code, 0, "stderr:\n{}", result.stderr);
    assert_eq!(env.real_runs().len(), 1);
}

#[test]
fn missing_explicit_config_aborts_before_running() {
    let env = TestEnv::new();
    let python = env.fake_python("Would install six-1.16.0", 0, 0);
    let missing = env.path("missing.toml");

    let result = env.run(&[
        "--config",
        path_str(&missing),
        "run",
        "--executable",
        path_str(&python),
        "pip",
        "install",
        "six",
    ]);

    assert_eq!(result.exit_code, ABORT_EXIT_CODE);
    assert!(result.stderr.contains("was aborted"));
    assert!(env.real_runs().is_empty());
}

#[test]
fn missing_executable_aborts_at_resolution() {
    let env = TestEnv::new();
    let missing = env.path("bin/no-such-python");

    let result = env.run(&[
        "run",
        "--executable",
        path_str(&missing),
        "pip",
        "install",
        "six",
    ]);

    assert_eq!(result.exit_code, ABORT_EXIT_CODE);
}

#[test]
fn invalid_config_aborts_and_is_still_logged() {
    let env = TestEnv::new();
    let config = env.write_file("bad.toml", "[policy]\non_warn = 12\n");
    let log_file = env.path("scfw.jsonl");
    let python = env.fake_python("Would install six-1.16.0", 0, 0);

    let result = env.run_with_env(
        &[
            "--config",
            path_str(&config),
            "run",
            "--executable",
            path_str(&python),
            "pip",
            "install",
            "six",
        ],
        &[("SCFW_LOG_FILE", path_str(&log_file))],
    );

    assert_eq!(result.exit_code, ABORT_EXIT_CODE, "stderr:\n{}", result.stderr);
    assert!(env.real_runs().is_empty());

    let content = std::fs::read_to_string(&log_file).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 1);
    let record: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(record["action"], "abort");
    assert_eq!(record["command"], "pip install six");
}

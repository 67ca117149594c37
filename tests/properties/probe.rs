//! Property tests for dry-run probe synthesis.

use std::sync::Arc;

use proptest::prelude::*;

use scfw::infrastructure::{PipCommand, SystemProcessRunner};

fn option_token() -> impl Strategy<Value = String> {
    prop_oneof![
        proptest::string::string_regex("[a-z][a-z0-9_.=<>-]{0,12}").unwrap(),
        proptest::string::string_regex("--[a-z][a-z-]{0,10}").unwrap(),
    ]
    .prop_filter("flags that skip resolution", |t| {
        !matches!(t.as_str(), "-h" | "--help" | "--dry-run" | "install")
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the probe is the original command with `--dry-run` placed
    /// right after `install`; nothing else moves.
    #[test]
    fn property_probe_inserts_flag_after_install(
        before in proptest::collection::vec(option_token(), 0..4),
        after in proptest::collection::vec(option_token(), 0..6)
    ) {
        let mut tokens = vec!["pip".to_string()];
        tokens.extend(before.iter().cloned());
        tokens.push("install".to_string());
        tokens.extend(after.iter().cloned());

        let command = PipCommand::new(
            tokens.clone(),
            Some("python".to_string()),
            Arc::new(SystemProcessRunner::new()),
        )
        .unwrap();
        let probe = command.dry_run_invocation().unwrap();

        let mut expected = vec!["-m".to_string(), "pip".to_string()];
        expected.extend(before);
        expected.push("install".to_string());
        expected.push("--dry-run".to_string());
        expected.extend(after);
        prop_assert_eq!(probe.args, expected);
        prop_assert_eq!(probe.program, "python");
    }
}

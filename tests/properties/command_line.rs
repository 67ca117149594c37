//! Property tests for splitting the firewall's arguments from the
//! package manager command.

use proptest::prelude::*;

use scfw::presentation::parse_command_line;

fn passthrough_token() -> impl Strategy<Value = String> {
    prop_oneof![
        proptest::string::string_regex("[a-z0-9._=<>-]{1,12}").unwrap(),
        proptest::string::string_regex("--?[a-z][a-z-]{0,10}").unwrap(),
        Just("pip".to_string()),
        Just("npm".to_string()),
        Just("--dry-run".to_string()),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: everything from the package manager token on is passed
    /// through untouched.
    #[test]
    fn property_package_command_is_verbatim(
        program in prop_oneof![Just("pip"), Just("npm")],
        tail in proptest::collection::vec(passthrough_token(), 0..8),
        dry_run in any::<bool>()
    ) {
        let mut argv = vec!["scfw".to_string(), "run".to_string()];
        if dry_run {
            argv.push("--dry-run".to_string());
        }
        argv.push(program.to_string());
        argv.extend(tail.iter().cloned());

        let invocation = parse_command_line(argv).unwrap();

        let mut expected = vec![program.to_string()];
        expected.extend(tail);
        prop_assert_eq!(invocation.package_command, expected);
    }
}

//! Property tests for pip and npm dry-run report parsing.

use proptest::prelude::*;

use scfw::domain::value_objects::InstallTarget;
use scfw::infrastructure::package_managers::{npm, pip};

fn package_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_.-]{0,12}[a-z0-9]").unwrap()
}

fn version() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[0-9]{1,3}(\\.[0-9]{1,3}){0,3}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: parsing a pip entry never panics.
    #[test]
    fn property_parse_pip_never_panics(token in ".*") {
        let _ = InstallTarget::parse_pip(&token);
    }

    /// PROPERTY: pip entries split on the last hyphen and keep report order.
    #[test]
    fn property_pip_report_preserves_entries(
        entries in proptest::collection::vec((package_name(), version()), 0..8)
    ) {
        let line = entries
            .iter()
            .map(|(name, version)| format!("{name}-{version}"))
            .collect::<Vec<_>>()
            .join(" ");
        let stdout = format!("Collecting things\nWould install {line}\n");

        let targets = pip::parse_dry_run_report(&stdout).unwrap();

        let parsed: Vec<(String, String)> = targets
            .iter()
            .map(|t| (t.package().to_string(), t.version().to_string()))
            .collect();
        prop_assert_eq!(parsed, entries);
    }

    /// PROPERTY: npm summaries yield one target per `add` line, in order.
    #[test]
    fn property_npm_report_preserves_add_lines(
        entries in proptest::collection::vec((package_name(), version()), 0..8)
    ) {
        let mut stdout = String::from("\n");
        for (name, version) in &entries {
            stdout.push_str(&format!("add {name} {version}\n"));
        }
        stdout.push_str(&format!("\nadded {} packages in 1s\n", entries.len()));

        let targets = npm::parse_dry_run_report(&stdout).unwrap();

        let parsed: Vec<(String, String)> = targets
            .iter()
            .map(|t| (t.package().to_string(), t.version().to_string()))
            .collect();
        prop_assert_eq!(parsed, entries);
    }
}

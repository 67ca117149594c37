//! Property tests for the decision engine.

use proptest::prelude::*;

use scfw::domain::entities::Finding;
use scfw::domain::policies::{decide, Verdict};
use scfw::domain::value_objects::{Ecosystem, InstallTarget, Severity, WarnPolicy};

fn severity() -> impl Strategy<Value = Severity> {
    prop_oneof![Just(Severity::None), Just(Severity::Warn), Just(Severity::Block)]
}

fn warn_policy() -> impl Strategy<Value = WarnPolicy> {
    prop_oneof![
        Just(WarnPolicy::Block),
        Just(WarnPolicy::Prompt),
        Just(WarnPolicy::Allow)
    ]
}

fn findings() -> impl Strategy<Value = Vec<Finding>> {
    let name = proptest::string::string_regex("[a-z][a-z0-9-]{0,8}").unwrap();
    proptest::collection::vec((name, severity()), 0..12).prop_map(|entries| {
        entries
            .into_iter()
            .map(|(name, severity)| {
                let target = InstallTarget::new(Ecosystem::Npm, name, "1.0.0").unwrap();
                Finding::new(target, severity, "flagged")
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: any blocking finding blocks, whatever the warn policy.
    #[test]
    fn property_blocking_finding_always_blocks(
        findings in findings(),
        policy in warn_policy()
    ) {
        let decision = decide(&findings, policy);
        if findings.iter().any(|f| f.severity == Severity::Block) {
            prop_assert_eq!(decision.verdict, Verdict::Block);
        }
    }

    /// PROPERTY: the decision does not depend on finding order.
    #[test]
    fn property_verdict_ignores_order(
        findings in findings(),
        policy in warn_policy()
    ) {
        let mut reversed = findings.clone();
        reversed.reverse();
        prop_assert_eq!(decide(&findings, policy).verdict, decide(&reversed, policy).verdict);
    }

    /// PROPERTY: without flagged findings the verdict is allow.
    #[test]
    fn property_clear_findings_allow(
        findings in findings(),
        policy in warn_policy()
    ) {
        let clear: Vec<Finding> = findings
            .into_iter()
            .filter(|f| f.severity == Severity::None)
            .collect();
        let decision = decide(&clear, policy);
        prop_assert_eq!(decision.verdict, Verdict::Allow);
        prop_assert!(decision.is_clear());
    }
}

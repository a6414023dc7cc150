//! Comparison of a parsed configuration against the settings we require

use tracing::trace;

use crate::config::SshdConfig;

/// A single required directive and the value it must have
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requirement {
    /// Directive name (case-sensitive)
    pub key: &'static str,
    /// Expected value (compared case-insensitively)
    pub expected: &'static str,
}

impl Requirement {
    /// Constructor
    #[must_use]
    pub const fn new(key: &'static str, expected: &'static str) -> Self {
        Self { key, expected }
    }
}

const HARDENED: &[Requirement] = &[
    Requirement::new("PermitRootLogin", "no"),
    Requirement::new("PasswordAuthentication", "no"),
    Requirement::new("Protocol", "2"),
    Requirement::new("PubkeyAuthentication", "yes"),
];

/// An ordered, immutable table of required settings.
///
/// Findings are reported in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredSettings(&'static [Requirement]);

impl RequiredSettings {
    /// Wraps a table
    #[must_use]
    pub const fn new(table: &'static [Requirement]) -> Self {
        Self(table)
    }

    /// The settings we audit for by default:
    ///
    /// | Directive                | Expected |
    /// |--------------------------|----------|
    /// | `PermitRootLogin`        | `no`     |
    /// | `PasswordAuthentication` | `no`     |
    /// | `Protocol`               | `2`      |
    /// | `PubkeyAuthentication`   | `yes`    |
    #[must_use]
    pub const fn hardened() -> Self {
        Self(HARDENED)
    }

    /// Iterates over the table in order
    pub fn requirements(&self) -> impl Iterator<Item = &'static Requirement> {
        let table: &'static [Requirement] = self.0;
        table.iter()
    }
}

impl Default for RequiredSettings {
    fn default() -> Self {
        Self::hardened()
    }
}

/// One discrepancy between the configuration and a [`Requirement`].
///
/// The `Display` form is the human-readable report line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Finding {
    /// The directive does not appear in the file
    #[error("Setting '{key}' not found (expected: {expected}).")]
    Missing {
        /// Directive name
        key: &'static str,
        /// Required value
        expected: &'static str,
    },
    /// The directive is present with some other value
    #[error("Setting '{key}' is '{actual}' (expected: {expected}).")]
    Mismatch {
        /// Directive name
        key: &'static str,
        /// The value found, as written in the file
        actual: String,
        /// Required value
        expected: &'static str,
    },
}

fn matches_expected(actual: &str, expected: &str) -> bool {
    actual.to_lowercase() == expected.to_lowercase()
}

/// Checks `config` against every entry in `required`, in order.
///
/// Returns one [`Finding`] per directive that is missing or has the wrong value;
/// an empty result means the configuration passes.
#[must_use]
pub fn audit(config: &SshdConfig, required: &RequiredSettings) -> Vec<Finding> {
    required
        .requirements()
        .filter_map(|req| {
            let finding = match config.get(req.key) {
                None => Some(Finding::Missing {
                    key: req.key,
                    expected: req.expected,
                }),
                Some(actual) if !matches_expected(actual, req.expected) => {
                    Some(Finding::Mismatch {
                        key: req.key,
                        actual: actual.to_owned(),
                        expected: req.expected,
                    })
                }
                Some(_) => None,
            };
            trace!("{}: {:?}", req.key, finding);
            finding
        })
        .collect()
}

#[cfg(test)]
mod test {
    use assertables::assert_contains;

    use super::{audit, Finding, RequiredSettings, Requirement};
    use crate::{config::SshdConfig, util::make_test_tempfile};

    fn config_from(contents: &str) -> SshdConfig {
        let (path, _dir) = make_test_tempfile(contents, "sshd_config");
        SshdConfig::load(path).unwrap()
    }

    fn messages(findings: &[Finding]) -> Vec<String> {
        findings.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn compliant_config_passes() {
        let config = config_from(
            "PermitRootLogin no\nPasswordAuthentication no\nProtocol 2\nPubkeyAuthentication yes\n",
        );
        assert!(audit(&config, &RequiredSettings::hardened()).is_empty());
    }

    #[test]
    fn comparison_ignores_case() {
        let config = config_from(
            "PermitRootLogin NO\nPasswordAuthentication No\nProtocol 2\nPubkeyAuthentication YES\n",
        );
        assert!(audit(&config, &RequiredSettings::hardened()).is_empty());
    }

    #[test]
    fn everything_missing() {
        let findings = audit(&SshdConfig::default(), &RequiredSettings::hardened());
        assert_eq!(
            messages(&findings),
            vec![
                "Setting 'PermitRootLogin' not found (expected: no).",
                "Setting 'PasswordAuthentication' not found (expected: no).",
                "Setting 'Protocol' not found (expected: 2).",
                "Setting 'PubkeyAuthentication' not found (expected: yes).",
            ]
        );
    }

    #[test]
    fn mismatch_reports_original_value() {
        let config = config_from(
            "PermitRootLogin  Prohibit-Password \nPasswordAuthentication no\nProtocol 2\nPubkeyAuthentication yes\n",
        );
        let findings = audit(&config, &RequiredSettings::hardened());
        assert_eq!(
            findings,
            vec![Finding::Mismatch {
                key: "PermitRootLogin",
                actual: "Prohibit-Password".into(),
                expected: "no",
            }]
        );
        assert_eq!(
            findings[0].to_string(),
            "Setting 'PermitRootLogin' is 'Prohibit-Password' (expected: no)."
        );
    }

    #[test]
    fn later_duplicate_decides_the_outcome() {
        let config = config_from(
            "PermitRootLogin no\nPasswordAuthentication no\nProtocol 2\nPubkeyAuthentication yes\nPermitRootLogin yes\n",
        );
        let findings = messages(&audit(&config, &RequiredSettings::hardened()));
        assert_eq!(findings.len(), 1);
        assert_contains!(findings[0], "is 'yes'");
    }

    #[test]
    fn findings_follow_table_order() {
        const TABLE: &[Requirement] = &[
            Requirement::new("Protocol", "2"),
            Requirement::new("Banner", "none"),
            Requirement::new("X11Forwarding", "no"),
        ];
        let config = config_from("X11Forwarding yes\nProtocol 2,1\n");
        let findings = audit(&config, &RequiredSettings::new(TABLE));
        assert_eq!(
            messages(&findings),
            vec![
                "Setting 'Protocol' is '2,1' (expected: 2).",
                "Setting 'Banner' not found (expected: none).",
                "Setting 'X11Forwarding' is 'yes' (expected: no).",
            ]
        );
    }

    #[test]
    fn default_table_is_hardened() {
        let keys: Vec<_> = RequiredSettings::default()
            .requirements()
            .map(|r| (r.key, r.expected))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("PermitRootLogin", "no"),
                ("PasswordAuthentication", "no"),
                ("Protocol", "2"),
                ("PubkeyAuthentication", "yes"),
            ]
        );
    }
}

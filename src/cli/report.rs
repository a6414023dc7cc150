//! Audit result output

use std::io::Write;

use super::styles::{CALL_OUT, SUCCESS};
use crate::audit::Finding;

const PRODUCT_NAME: &str = "HispionSSHGuard";

/// Writes the audit outcome to `out`.
///
/// With no findings this is a single success line; otherwise a header, then one line per finding.
pub(super) fn write_report<W: Write>(out: &mut W, findings: &[Finding]) -> std::io::Result<()> {
    if findings.is_empty() {
        writeln!(
            out,
            "{SUCCESS}{PRODUCT_NAME}:{SUCCESS:#} All required SSH configuration settings are correctly set."
        )?;
    } else {
        writeln!(out, "{CALL_OUT}{PRODUCT_NAME} Audit Results:{CALL_OUT:#}")?;
        for finding in findings {
            writeln!(out, " - {finding}")?;
        }
    }
    out.flush()
}

#[cfg(test)]
mod test {
    use anstream::StripStream;

    use super::write_report;
    use crate::audit::Finding;

    fn render(findings: &[Finding]) -> String {
        let mut buf = Vec::new();
        write_report(&mut StripStream::new(&mut buf), findings).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn success_line() {
        assert_eq!(
            render(&[]),
            "HispionSSHGuard: All required SSH configuration settings are correctly set.\n"
        );
    }

    #[test]
    fn findings_are_listed() {
        let findings = [
            Finding::Mismatch {
                key: "Protocol",
                actual: "1".into(),
                expected: "2",
            },
            Finding::Missing {
                key: "PubkeyAuthentication",
                expected: "yes",
            },
        ];
        assert_eq!(
            render(&findings),
            "HispionSSHGuard Audit Results:\n \
             - Setting 'Protocol' is '1' (expected: 2).\n \
             - Setting 'PubkeyAuthentication' not found (expected: yes).\n"
        );
    }
}

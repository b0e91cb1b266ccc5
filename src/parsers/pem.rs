//! PEM trust-list bundle parser.
//!
//! A trust list is a concatenation of blocks of the form
//!
//! ```text
//! CN=Example Root CA, O=Example Org, C=US
//! -----BEGIN CERTIFICATE-----
//! MIIB...
//! -----END CERTIFICATE-----
//! ```
//!
//! The free-text line before each block is taken as the certificate subject.
//! Blocks without a BEGIN delimiter or without a subject line are dropped
//! silently.

use crate::model::{Certificate, NOT_AVAILABLE};
use regex::Regex;
use sha2::{Digest, Sha256};
use std::sync::LazyLock;

/// Opening delimiter of a PEM certificate.
pub const PEM_BEGIN: &str = "-----BEGIN CERTIFICATE-----";
/// Closing delimiter of a PEM certificate.
pub const PEM_END: &str = "-----END CERTIFICATE-----";

static ORGANIZATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"O=([^,]+)").expect("static regex"));
static COMMON_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"CN=([^,]+)").expect("static regex"));

/// Parse a concatenated PEM bundle into certificates.
///
/// Ids are assigned in emission order, so they stay contiguous even when
/// malformed blocks are skipped.
#[must_use]
pub fn parse_pem_bundle(text: &str) -> Vec<Certificate> {
    let mut certificates = Vec::new();

    for block in text.split(PEM_END).map(str::trim).filter(|b| !b.is_empty()) {
        let Some((subject, body)) = block.split_once(PEM_BEGIN) else {
            continue;
        };
        let subject = subject.trim();
        if subject.is_empty() {
            continue;
        }

        // Anything after a second BEGIN in the same block is not part of this body.
        let body = body.split(PEM_BEGIN).next().unwrap_or_default().trim();
        let pem = format!("{PEM_BEGIN}\n{body}\n{PEM_END}");

        certificates.push(Certificate {
            id: certificates.len(),
            subject: subject.to_string(),
            organization: extract_subject_field(subject, "O"),
            common_name: extract_subject_field(subject, "CN"),
            fingerprint: fingerprint(&pem),
            pem,
        });
    }

    certificates
}

/// Extract `KEY=value` from a comma-separated subject line.
///
/// The value runs to the next comma or the end of the line and is trimmed.
/// Escaped or quoted commas inside a value are not recognized. Returns `N/A`
/// when the field is absent.
#[must_use]
pub fn extract_subject_field(subject: &str, key: &str) -> String {
    let captured = match key {
        "O" => capture(&ORGANIZATION_RE, subject),
        "CN" => capture(&COMMON_NAME_RE, subject),
        other => Regex::new(&format!("{}=([^,]+)", regex::escape(other)))
            .ok()
            .and_then(|re| capture(&re, subject)),
    };
    captured.unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn capture(re: &Regex, subject: &str) -> Option<String> {
    re.captures(subject)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

fn fingerprint(pem: &str) -> String {
    let digest = Sha256::digest(pem.as_bytes());
    format!("{digest:x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_CERTS: &str = "A\n-----BEGIN CERTIFICATE-----\nBODY1\n-----END CERTIFICATE-----\nB\n-----BEGIN CERTIFICATE-----\nBODY2\n-----END CERTIFICATE-----\n";

    #[test]
    fn test_parses_sequential_blocks() {
        let certs = parse_pem_bundle(TWO_CERTS);

        assert_eq!(certs.len(), 2);
        assert_eq!(certs[0].id, 0);
        assert_eq!(certs[1].id, 1);
        assert_eq!(certs[0].subject, "A");
        assert_eq!(certs[1].subject, "B");
        assert_eq!(
            certs[0].pem,
            "-----BEGIN CERTIFICATE-----\nBODY1\n-----END CERTIFICATE-----"
        );
        assert_eq!(
            certs[1].pem,
            "-----BEGIN CERTIFICATE-----\nBODY2\n-----END CERTIFICATE-----"
        );
    }

    #[test]
    fn test_subject_field_extraction() {
        let subject = "CN=Example CA, O=Example Org, C=US";
        assert_eq!(extract_subject_field(subject, "CN"), "Example CA");
        assert_eq!(extract_subject_field(subject, "O"), "Example Org");
        assert_eq!(extract_subject_field(subject, "C"), "US");
        assert_eq!(extract_subject_field(subject, "OU"), "N/A");
    }

    #[test]
    fn test_missing_fields_are_not_available() {
        let certs = parse_pem_bundle(
            "just a comment\n-----BEGIN CERTIFICATE-----\nQUJD\n-----END CERTIFICATE-----",
        );
        assert_eq!(certs.len(), 1);
        assert_eq!(certs[0].organization, "N/A");
        assert_eq!(certs[0].common_name, "N/A");
    }

    #[test]
    fn test_malformed_blocks_are_skipped_and_ids_stay_contiguous() {
        let text = concat!(
            "orphan body without begin\n-----END CERTIFICATE-----\n",
            "-----BEGIN CERTIFICATE-----\nNOSUBJECT\n-----END CERTIFICATE-----\n",
            "CN=Kept, O=Org\n-----BEGIN CERTIFICATE-----\nKEPT\n-----END CERTIFICATE-----\n",
            "trailing garbage"
        );
        let certs = parse_pem_bundle(text);
        assert_eq!(certs.len(), 1);
        assert_eq!(certs[0].id, 0);
        assert_eq!(certs[0].common_name, "Kept");
    }

    #[test]
    fn test_body_whitespace_is_trimmed() {
        let certs = parse_pem_bundle(
            "  CN=Spaced  \r\n-----BEGIN CERTIFICATE-----\r\n\r\nLINE1\nLINE2\r\n\r\n-----END CERTIFICATE-----",
        );
        assert_eq!(certs[0].subject, "CN=Spaced");
        assert_eq!(
            certs[0].pem,
            "-----BEGIN CERTIFICATE-----\nLINE1\nLINE2\n-----END CERTIFICATE-----"
        );
    }

    #[test]
    fn test_fingerprint_is_stable_hex() {
        let first = parse_pem_bundle(TWO_CERTS);
        let second = parse_pem_bundle(TWO_CERTS);
        assert_eq!(first[0].fingerprint, second[0].fingerprint);
        assert_ne!(first[0].fingerprint, first[1].fingerprint);
        assert_eq!(first[0].fingerprint.len(), 64);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_pem_bundle("").is_empty());
        assert!(parse_pem_bundle("\n\n   \n").is_empty());
    }
}

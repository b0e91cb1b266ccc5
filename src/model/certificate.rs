//! Certificate records parsed from a PEM trust-list bundle.

use serde::{Deserialize, Serialize};

/// One certificate of a trust list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    /// Position among the certificates parsed from the bundle.
    ///
    /// Not stable across fetches if the upstream ordering changes; use
    /// [`Certificate::fingerprint`] to identify a certificate.
    pub id: usize,
    /// Free-text subject line preceding the PEM block.
    pub subject: String,
    /// `O=` value of the subject, or `N/A`.
    pub organization: String,
    /// `CN=` value of the subject, or `N/A`.
    pub common_name: String,
    /// Reconstructed PEM text including BEGIN/END lines.
    pub pem: String,
    /// Hex SHA-256 of `pem`.
    pub fingerprint: String,
}

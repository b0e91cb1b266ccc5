//! Certificate filter shared by the trust-list and TSA trust-list views.

use super::{caseless_cmp, contains_ignore_case, distinct_sorted};
use crate::model::Certificate;

/// Filter state of a certificate view. Empty strings mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CertificateFilter {
    pub organization: String,
    pub search: String,
}

impl CertificateFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.organization.is_empty() || !self.search.is_empty()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn matches(&self, certificate: &Certificate) -> bool {
        self.matches_with_term(certificate, &self.search.to_lowercase())
    }

    fn matches_with_term(&self, certificate: &Certificate, term: &str) -> bool {
        (self.organization.is_empty() || certificate.organization == self.organization)
            && (contains_ignore_case(&certificate.common_name, term)
                || contains_ignore_case(&certificate.subject, term))
    }

    /// Filter in emission order.
    #[must_use]
    pub fn apply<'a>(&self, certificates: &'a [Certificate]) -> Vec<&'a Certificate> {
        self.apply_indices(certificates)
            .into_iter()
            .map(|i| &certificates[i])
            .collect()
    }

    /// Positions into `certificates` of the matching items.
    #[must_use]
    pub fn apply_indices(&self, certificates: &[Certificate]) -> Vec<usize> {
        let term = self.search.to_lowercase();
        certificates
            .iter()
            .enumerate()
            .filter(|(_, c)| self.matches_with_term(c, &term))
            .map(|(i, _)| i)
            .collect()
    }

    /// Distinct organizations, case-insensitively ordered.
    #[must_use]
    pub fn organizations(certificates: &[Certificate]) -> Vec<String> {
        distinct_sorted(
            certificates.iter().map(|c| c.organization.as_str()),
            caseless_cmp,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cert(id: usize, cn: &str, org: &str) -> Certificate {
        Certificate {
            id,
            subject: format!("CN={cn}, O={org}"),
            organization: org.to_string(),
            common_name: cn.to_string(),
            ..Default::default()
        }
    }

    fn sample() -> Vec<Certificate> {
        vec![
            cert(0, "Example Root CA", "Example Org"),
            cert(1, "Issuing CA", "Other Org"),
            cert(2, "ROOT TSA", "Other Org"),
            cert(3, "Leaf", "Rooted Ltd"),
        ]
    }

    #[test]
    fn test_search_without_organization() {
        let certs = sample();
        let filter = CertificateFilter {
            search: "root".to_string(),
            ..Default::default()
        };
        let ids: Vec<_> = filter.apply(&certs).iter().map(|c| c.id).collect();
        // "Rooted Ltd" matches through the subject line
        assert_eq!(ids, [0, 2, 3]);
    }

    #[test]
    fn test_organization_is_exact() {
        let certs = sample();
        let filter = CertificateFilter {
            organization: "Other Org".to_string(),
            ..Default::default()
        };
        let ids: Vec<_> = filter.apply(&certs).iter().map(|c| c.id).collect();
        assert_eq!(ids, [1, 2]);

        let filter = CertificateFilter {
            organization: "Other".to_string(),
            ..Default::default()
        };
        assert!(filter.apply(&certs).is_empty());
    }

    #[test]
    fn test_combined_filters_and_reset() {
        let certs = sample();
        let mut filter = CertificateFilter {
            organization: "Other Org".to_string(),
            search: "tsa".to_string(),
        };
        assert!(filter.is_active());
        let ids: Vec<_> = filter.apply(&certs).iter().map(|c| c.id).collect();
        assert_eq!(ids, [2]);

        filter.reset();
        assert!(!filter.is_active());
        assert_eq!(filter.apply(&certs).len(), certs.len());
    }

    #[test]
    fn test_organizations_list() {
        assert_eq!(
            CertificateFilter::organizations(&sample()),
            ["Example Org", "Other Org", "Rooted Ltd"]
        );
    }
}

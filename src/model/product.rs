//! Conforming-product records, raw and normalized.

use super::lenient;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sentinel rendered for optional fields that are absent upstream.
pub const NOT_AVAILABLE: &str = "N/A";

/// Media category -> list of container formats, in upstream key order.
///
/// `None` marks an entry whose value was not an array.
pub type ContainerFormats = IndexMap<String, Option<Vec<String>>>;

/// One entry of the published conforming-products list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawProduct {
    #[serde(deserialize_with = "lenient::string")]
    pub record_id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub applicant: String,
    #[serde(deserialize_with = "lenient::record")]
    pub product: RawProductDescriptor,
    #[serde(deserialize_with = "lenient::string_list")]
    pub spec_version: Vec<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub conformance_program_version: String,
    #[serde(deserialize_with = "lenient::record")]
    pub containers: RawContainers,
    #[serde(deserialize_with = "lenient::string")]
    pub status: String,
    #[serde(deserialize_with = "lenient::record")]
    pub dates: RawDates,
}

/// The `product` block of a raw record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawProductDescriptor {
    /// `generatorProduct` or `validatorProduct`
    #[serde(deserialize_with = "lenient::string")]
    pub product_type: String,
    #[serde(rename = "DN", deserialize_with = "lenient::record")]
    pub dn: RawDistinguishedName,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::opt_string"
    )]
    pub min_version: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::opt_record"
    )]
    pub assurance: Option<RawAssurance>,
}

/// Distinguished-name fields identifying the product.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawDistinguishedName {
    #[serde(rename = "CN", deserialize_with = "lenient::string")]
    pub common_name: String,
    #[serde(rename = "O", deserialize_with = "lenient::string")]
    pub organization: String,
    #[serde(
        rename = "OU",
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::opt_string"
    )]
    pub organizational_unit: Option<String>,
    #[serde(rename = "C", deserialize_with = "lenient::string")]
    pub country: String,
}

/// Assurance claims of a product.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawAssurance {
    /// Usually a number; kept as a JSON value so string levels also load.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_assurance_level: Option<serde_json::Value>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::opt_string_list"
    )]
    pub attestation_methods: Option<Vec<String>>,
}

impl RawAssurance {
    /// Render the level for display, `None` when absent, zero or empty.
    #[must_use]
    pub fn level_label(&self) -> Option<String> {
        match self.max_assurance_level.as_ref()? {
            serde_json::Value::Number(n) if n.as_f64() == Some(0.0) => None,
            serde_json::Value::Number(n) => Some(n.to_string()),
            serde_json::Value::String(s) if s.is_empty() => None,
            serde_json::Value::String(s) => Some(s.clone()),
            _ => None,
        }
    }
}

/// Supported container formats for generation and validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawContainers {
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::container"
    )]
    pub generate: Option<ContainerFormats>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::container"
    )]
    pub validate: Option<ContainerFormats>,
}

/// Lifecycle dates of a conformance record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawDates {
    #[serde(deserialize_with = "lenient::string")]
    pub creation: String,
    #[serde(deserialize_with = "lenient::string")]
    pub conformance: String,
    #[serde(deserialize_with = "lenient::string")]
    pub earliest_public_disclosure: String,
    #[serde(deserialize_with = "lenient::string")]
    pub last_modification: String,
}

/// A normalized, display-ready product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub record_id: String,
    pub vendor_name: String,
    pub product_name: String,
    /// Empty when the upstream DN has no OU.
    pub organizational_unit: String,
    /// `N/A` when no minimum version is published.
    pub product_version: String,
    /// `Generator`, `Validator`, or the raw value when unknown.
    pub product_type: String,
    /// `Level N` or `N/A`.
    pub assurance_level: String,
    pub supported_file_formats: Vec<String>,
    pub formats_by_media_type: BTreeMap<String, Vec<String>>,
    pub supported_media_types: Vec<String>,
    pub creation_date: String,
    pub conformance_date: String,

    // Detail-only fields shown in the details modal
    pub organization: String,
    pub country: String,
    pub spec_versions: Vec<String>,
    pub conformance_program_version: String,
    pub status: String,
    pub earliest_public_disclosure_date: String,
    pub last_modification_date: String,
}

impl Product {
    /// Formats listed for a media type, empty if the product does not support it.
    #[must_use]
    pub fn formats_for(&self, media_type: &str) -> &[String] {
        self.formats_by_media_type
            .get(media_type)
            .map_or(&[], Vec::as_slice)
    }

    /// Whether the product supports any of the given media types.
    pub fn supports_any_media_type<'a>(&self, mut media: impl Iterator<Item = &'a String>) -> bool {
        media.any(|m| self.supported_media_types.binary_search(m).is_ok())
    }

    /// Whether the product supports any of the given file formats.
    pub fn supports_any_format<'a>(&self, mut formats: impl Iterator<Item = &'a String>) -> bool {
        formats.any(|f| self.supported_file_formats.binary_search(f).is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_product_deserializes_upstream_shape() {
        let json = r#"{
            "recordId": "rec-001",
            "applicant": "Acme",
            "product": {
                "productType": "generatorProduct",
                "DN": {"CN": "Acme Cam", "O": "Acme Inc", "C": "US"},
                "assurance": {"maxAssuranceLevel": 2}
            },
            "specVersion": ["2.1"],
            "conformanceProgramVersion": "1.0",
            "containers": {"generate": {"image": ["jpeg", "png"], "video": null}},
            "status": "conformant",
            "dates": {"creation": "2024-01-01", "conformance": "2024-02-01"}
        }"#;

        let raw: RawProduct = serde_json::from_str(json).unwrap();
        assert_eq!(raw.record_id, "rec-001");
        assert_eq!(raw.product.dn.common_name, "Acme Cam");
        assert!(raw.product.dn.organizational_unit.is_none());
        assert!(raw.product.min_version.is_none());
        let generate = raw.containers.generate.unwrap();
        assert_eq!(generate.keys().collect::<Vec<_>>(), ["image", "video"]);
        assert!(raw.containers.validate.is_none());
        assert_eq!(raw.dates.earliest_public_disclosure, "");
    }

    #[test]
    fn test_assurance_level_label() {
        let numeric = RawAssurance {
            max_assurance_level: Some(serde_json::json!(3)),
            attestation_methods: None,
        };
        assert_eq!(numeric.level_label().as_deref(), Some("3"));

        let zero = RawAssurance {
            max_assurance_level: Some(serde_json::json!(0)),
            attestation_methods: None,
        };
        assert_eq!(zero.level_label(), None);

        assert_eq!(RawAssurance::default().level_label(), None);
    }

    #[test]
    fn test_product_membership_helpers() {
        let product = Product {
            supported_media_types: vec!["audio".into(), "image".into()],
            supported_file_formats: vec!["jpeg".into(), "mp3".into()],
            ..Default::default()
        };
        let wanted = ["video".to_string(), "image".to_string()];
        assert!(product.supports_any_media_type(wanted.iter()));
        let formats = ["png".to_string()];
        assert!(!product.supports_any_format(formats.iter()));
        assert!(product.formats_for("fonts").is_empty());
    }
}

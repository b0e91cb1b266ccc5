//! Conforming-products normalizer.

use crate::error::{ErrorContext, Result};
use crate::model::{lenient, ContainerFormats, Product, RawProduct, NOT_AVAILABLE};
use std::collections::{BTreeMap, BTreeSet};

/// Map the upstream product-type enum to its display label.
///
/// Unknown values pass through unchanged.
#[must_use]
pub fn friendly_product_type(raw: &str) -> &str {
    match raw {
        "generatorProduct" => "Generator",
        "validatorProduct" => "Validator",
        other => other,
    }
}

/// Decode the conforming-products JSON payload.
///
/// A payload whose top level is not an array yields an empty list; invalid
/// JSON is an error. Records are decoded one at a time: odd field values
/// fall back to their empty form, and array entries that are not objects
/// are skipped.
pub fn parse_products_str(content: &str) -> Result<Vec<Product>> {
    let value: serde_json::Value =
        serde_json::from_str(content).context("decoding conforming-products list")?;
    let serde_json::Value::Array(entries) = value else {
        tracing::debug!("conforming-products payload is not an array, treating as empty");
        return Ok(Vec::new());
    };
    let raw: Vec<RawProduct> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            if entry.is_object() {
                Some(lenient::decode_or_default(entry))
            } else {
                tracing::debug!(index, "skipping non-object conforming-product entry");
                None
            }
        })
        .collect();
    Ok(normalize_products(&raw))
}

/// Normalize raw records one-to-one, preserving order.
#[must_use]
pub fn normalize_products(raw: &[RawProduct]) -> Vec<Product> {
    raw.iter().map(normalize_product).collect()
}

/// Normalize a single raw record.
#[must_use]
pub fn normalize_product(raw: &RawProduct) -> Product {
    let mut by_media: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    let mut all_formats: BTreeSet<String> = BTreeSet::new();

    for container in [&raw.containers.generate, &raw.containers.validate]
        .into_iter()
        .flatten()
    {
        merge_container(container, &mut by_media, &mut all_formats);
    }

    let supported_media_types: Vec<String> = by_media.keys().cloned().collect();
    let formats_by_media_type: BTreeMap<String, Vec<String>> = by_media
        .into_iter()
        .map(|(media, formats)| (media, formats.into_iter().collect()))
        .collect();

    let descriptor = &raw.product;
    let assurance_level = descriptor
        .assurance
        .as_ref()
        .and_then(crate::model::RawAssurance::level_label)
        .map_or_else(|| NOT_AVAILABLE.to_string(), |level| format!("Level {level}"));

    Product {
        record_id: raw.record_id.clone(),
        vendor_name: raw.applicant.clone(),
        product_name: descriptor.dn.common_name.clone(),
        organizational_unit: descriptor
            .dn
            .organizational_unit
            .clone()
            .unwrap_or_default(),
        product_version: descriptor
            .min_version
            .clone()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        product_type: friendly_product_type(&descriptor.product_type).to_string(),
        assurance_level,
        supported_file_formats: all_formats.into_iter().collect(),
        formats_by_media_type,
        supported_media_types,
        creation_date: raw.dates.creation.clone(),
        conformance_date: raw.dates.conformance.clone(),
        organization: descriptor.dn.organization.clone(),
        country: descriptor.dn.country.clone(),
        spec_versions: raw.spec_version.clone(),
        conformance_program_version: raw.conformance_program_version.clone(),
        status: raw.status.clone(),
        earliest_public_disclosure_date: raw.dates.earliest_public_disclosure.clone(),
        last_modification_date: raw.dates.last_modification.clone(),
    }
}

/// Fold one container map into the per-media and global format sets.
///
/// Media types whose format list is missing or empty are not recorded.
fn merge_container(
    container: &ContainerFormats,
    by_media: &mut BTreeMap<String, BTreeSet<String>>,
    all_formats: &mut BTreeSet<String>,
) {
    for (media_type, formats) in container {
        let Some(formats) = formats.as_ref().filter(|f| !f.is_empty()) else {
            continue;
        };
        let entry = by_media.entry(media_type.clone()).or_default();
        for format in formats {
            entry.insert(format.clone());
            all_formats.insert(format.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RawAssurance, RawContainers, RawDistinguishedName, RawProductDescriptor};

    fn container(entries: &[(&str, &[&str])]) -> ContainerFormats {
        entries
            .iter()
            .map(|(k, v)| {
                (
                    (*k).to_string(),
                    Some(v.iter().map(|s| (*s).to_string()).collect()),
                )
            })
            .collect()
    }

    fn raw_product() -> RawProduct {
        RawProduct {
            record_id: "rec-42".to_string(),
            applicant: "Acme".to_string(),
            product: RawProductDescriptor {
                product_type: "validatorProduct".to_string(),
                dn: RawDistinguishedName {
                    common_name: "Acme Validator".to_string(),
                    organization: "Acme Inc".to_string(),
                    organizational_unit: Some("Imaging".to_string()),
                    country: "US".to_string(),
                },
                min_version: Some("1.2.0".to_string()),
                assurance: Some(RawAssurance {
                    max_assurance_level: Some(serde_json::json!(2)),
                    attestation_methods: None,
                }),
            },
            containers: RawContainers {
                generate: Some(container(&[("image", &["png", "jpeg"]), ("audio", &[])])),
                validate: Some(container(&[("image", &["jpeg", "heic"]), ("video", &["mp4"])])),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_merges_generate_and_validate() {
        let product = normalize_product(&raw_product());

        assert_eq!(product.supported_media_types, ["image", "video"]);
        assert_eq!(product.formats_for("image"), ["heic", "jpeg", "png"]);
        assert_eq!(product.formats_for("video"), ["mp4"]);
        assert_eq!(product.supported_file_formats, ["heic", "jpeg", "mp4", "png"]);
        assert!(!product.formats_by_media_type.contains_key("audio"));
    }

    #[test]
    fn test_display_labels() {
        let product = normalize_product(&raw_product());
        assert_eq!(product.product_type, "Validator");
        assert_eq!(product.assurance_level, "Level 2");
        assert_eq!(product.product_version, "1.2.0");
        assert_eq!(product.organizational_unit, "Imaging");
        assert_eq!(product.product_name, "Acme Validator");
        assert_eq!(product.vendor_name, "Acme");
    }

    #[test]
    fn test_missing_optional_fields_use_sentinels() {
        let mut raw = raw_product();
        raw.product.assurance = None;
        raw.product.min_version = None;
        raw.product.dn.organizational_unit = None;
        raw.containers = RawContainers::default();

        let product = normalize_product(&raw);
        assert_eq!(product.assurance_level, "N/A");
        assert_eq!(product.product_version, "N/A");
        assert_eq!(product.organizational_unit, "");
        assert!(product.supported_file_formats.is_empty());
        assert!(product.supported_media_types.is_empty());
    }

    #[test]
    fn test_unknown_product_type_passes_through() {
        assert_eq!(friendly_product_type("generatorProduct"), "Generator");
        assert_eq!(friendly_product_type("signerProduct"), "signerProduct");
    }

    #[test]
    fn test_parse_non_array_payload_is_empty() {
        assert!(parse_products_str(r#"{"error": "rate limited"}"#).unwrap().is_empty());
        assert!(parse_products_str("not json").is_err());
    }

    #[test]
    fn test_one_odd_record_does_not_empty_the_list() {
        let json = r#"[
            {"recordId": "ok", "applicant": "A", "product": {"DN": {"CN": "Cam"}},
             "containers": {"generate": {"image": ["png"]}}},
            {"recordId": "odd", "applicant": null, "product": {"DN": {"CN": null}, "minVersion": 3},
             "containers": {"generate": {"image": ["jpeg"]}, "validate": {"image": "jpeg", "video": ["mp4"]}},
             "dates": {"conformance": null, "creation": "2024-01-01"}}
        ]"#;
        let products = parse_products_str(json).unwrap();
        assert_eq!(products.len(), 2);

        let odd = &products[1];
        assert_eq!(odd.record_id, "odd");
        assert_eq!(odd.vendor_name, "");
        assert_eq!(odd.product_name, "");
        assert_eq!(odd.product_version, "3");
        assert_eq!(odd.conformance_date, "");
        assert_eq!(odd.creation_date, "2024-01-01");
        assert_eq!(odd.formats_for("image"), ["jpeg"]);
        assert_eq!(odd.supported_media_types, ["image", "video"]);
    }

    #[test]
    fn test_mistyped_nested_blocks_fall_back_to_defaults() {
        let json = r#"[
            {"recordId": "r1", "product": "camera", "containers": [], "dates": "2024"},
            42,
            {"recordId": "r2", "product": {"assurance": {"maxAssuranceLevel": null}}}
        ]"#;
        let products = parse_products_str(json).unwrap();
        let ids: Vec<_> = products.iter().map(|p| p.record_id.as_str()).collect();
        assert_eq!(ids, ["r1", "r2"]);
        assert_eq!(products[0].assurance_level, "N/A");
        assert!(products[0].supported_file_formats.is_empty());
        assert_eq!(products[1].assurance_level, "N/A");
    }

    #[test]
    fn test_parse_preserves_order() {
        let json = r#"[
            {"recordId": "b", "applicant": "B", "product": {"productType": "generatorProduct", "DN": {"CN": "Two"}}},
            {"recordId": "a", "applicant": "A", "product": {"productType": "validatorProduct", "DN": {"CN": "One"}}}
        ]"#;
        let products = parse_products_str(json).unwrap();
        let ids: Vec<_> = products.iter().map(|p| p.record_id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
        assert_eq!(products[0].product_type, "Generator");
    }
}

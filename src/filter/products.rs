//! Product filter state and the filter/sort engine.

use super::{caseless_cmp, contains_ignore_case, distinct_sorted, natural_cmp};
use crate::model::Product;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Media-type keys offered by the media filter, with display labels.
pub const MEDIA_TYPES: [(&str, &str); 6] = [
    ("image", "Image"),
    ("video", "Video"),
    ("audio", "Audio"),
    ("documents", "Documents"),
    ("fonts", "Fonts"),
    ("mlModel", "ML Model"),
];

/// Sort order for product lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductSortKey {
    /// Conformance date, newest first
    #[default]
    ConformanceDateDesc,
    /// Conformance date, oldest first
    ConformanceDateAsc,
    /// Application (creation) date, newest first
    CreationDateDesc,
    /// Application (creation) date, oldest first
    CreationDateAsc,
}

impl ProductSortKey {
    pub const ALL: [Self; 4] = [
        Self::ConformanceDateDesc,
        Self::ConformanceDateAsc,
        Self::CreationDateDesc,
        Self::CreationDateAsc,
    ];

    /// Label shown in the sort selector.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ConformanceDateDesc => "Conformance Date (Newest)",
            Self::ConformanceDateAsc => "Conformance Date (Oldest)",
            Self::CreationDateDesc => "Application Date (Newest)",
            Self::CreationDateAsc => "Application Date (Oldest)",
        }
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::ConformanceDateDesc => "conformance-date-desc",
            Self::ConformanceDateAsc => "conformance-date-asc",
            Self::CreationDateDesc => "creation-date-desc",
            Self::CreationDateAsc => "creation-date-asc",
        }
    }

    /// The next key in selector order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::ConformanceDateDesc => Self::ConformanceDateAsc,
            Self::ConformanceDateAsc => Self::CreationDateDesc,
            Self::CreationDateDesc => Self::CreationDateAsc,
            Self::CreationDateAsc => Self::ConformanceDateDesc,
        }
    }

    fn date_of(self, product: &Product) -> &str {
        match self {
            Self::ConformanceDateDesc | Self::ConformanceDateAsc => &product.conformance_date,
            Self::CreationDateDesc | Self::CreationDateAsc => &product.creation_date,
        }
    }

    const fn descending(self) -> bool {
        matches!(self, Self::ConformanceDateDesc | Self::CreationDateDesc)
    }
}

impl fmt::Display for ProductSortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductSortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', '-'], "");
        match normalized.as_str() {
            "conformancedatedesc" | "conformance" | "newest" => Ok(Self::ConformanceDateDesc),
            "conformancedateasc" | "oldest" => Ok(Self::ConformanceDateAsc),
            "creationdatedesc" | "creation" => Ok(Self::CreationDateDesc),
            "creationdateasc" => Ok(Self::CreationDateAsc),
            _ => Err(format!(
                "unknown sort key '{s}' (expected one of: {})",
                Self::ALL.map(Self::as_str).join(", ")
            )),
        }
    }
}

/// Parse an upstream date string to milliseconds since the epoch.
///
/// Accepts RFC 3339 timestamps, `YYYY-MM-DD`, and `YYYY-MM-DDTHH:MM:SS`
/// (taken as UTC). Returns `None` for anything else.
#[must_use]
pub fn parse_timestamp(value: &str) -> Option<i64> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.and_utc().timestamp_millis());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis())
}

/// Filter state of the products view.
///
/// Empty strings and empty sets mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub vendor: String,
    pub product_type: String,
    pub assurance_level: String,
    pub search: String,
    pub sort: ProductSortKey,
    media_types: BTreeSet<String>,
    formats: BTreeSet<String>,
}

impl ProductFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An unconstrained filter with the given sort order.
    #[must_use]
    pub fn sorted_by(sort: ProductSortKey) -> Self {
        Self {
            sort,
            ..Self::default()
        }
    }

    /// Selected media types.
    #[must_use]
    pub const fn media_types(&self) -> &BTreeSet<String> {
        &self.media_types
    }

    /// Selected file formats.
    #[must_use]
    pub const fn formats(&self) -> &BTreeSet<String> {
        &self.formats
    }

    /// Replace the media-type selection.
    ///
    /// Formats only make sense relative to selected media types, so an empty
    /// selection also clears the format selection.
    pub fn set_media_types(&mut self, media_types: impl IntoIterator<Item = String>) {
        self.media_types = media_types.into_iter().collect();
        self.clear_orphaned_formats();
    }

    /// Add or remove one media type.
    pub fn toggle_media_type(&mut self, media_type: &str) {
        if !self.media_types.remove(media_type) {
            self.media_types.insert(media_type.to_string());
        }
        self.clear_orphaned_formats();
    }

    /// Drop every selected media type (and with it every format).
    pub fn clear_media_types(&mut self) {
        self.media_types.clear();
        self.clear_orphaned_formats();
    }

    /// Replace the format selection. Ignored while no media type is selected.
    pub fn set_formats(&mut self, formats: impl IntoIterator<Item = String>) {
        self.formats = formats.into_iter().collect();
        self.clear_orphaned_formats();
    }

    /// Add or remove one format.
    pub fn toggle_format(&mut self, format: &str) {
        if !self.formats.remove(format) {
            self.formats.insert(format.to_string());
        }
        self.clear_orphaned_formats();
    }

    fn clear_orphaned_formats(&mut self) {
        if self.media_types.is_empty() {
            self.formats.clear();
        }
    }

    /// Whether any filter differs from "show everything".
    ///
    /// The sort order is not a filter.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.vendor.is_empty()
            || !self.product_type.is_empty()
            || !self.assurance_level.is_empty()
            || !self.media_types.is_empty()
            || !self.formats.is_empty()
            || !self.search.is_empty()
    }

    /// Restore every field, including the sort order, to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether a single product passes every filter.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_with_term(product, &self.search.to_lowercase())
    }

    fn matches_with_term(&self, product: &Product, term: &str) -> bool {
        let vendor_match = self.vendor.is_empty() || product.vendor_name == self.vendor;
        let type_match = self.product_type.is_empty() || product.product_type == self.product_type;
        let level_match =
            self.assurance_level.is_empty() || product.assurance_level == self.assurance_level;
        let media_match =
            self.media_types.is_empty() || product.supports_any_media_type(self.media_types.iter());
        let format_match =
            self.formats.is_empty() || product.supports_any_format(self.formats.iter());
        let search_match = term.is_empty()
            || contains_ignore_case(&product.product_name, term)
            || contains_ignore_case(&product.vendor_name, term)
            || contains_ignore_case(&product.organizational_unit, term)
            || contains_ignore_case(&product.record_id, term);

        vendor_match && type_match && level_match && media_match && format_match && search_match
    }

    /// Filter and sort, returning references into `products`.
    ///
    /// Products with equal dates keep their input order. Dates that cannot be
    /// parsed sort after every parseable date in both directions.
    #[must_use]
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        self.apply_indices(products)
            .into_iter()
            .map(|i| &products[i])
            .collect()
    }

    /// Like [`apply`](Self::apply), but yields positions into `products`.
    #[must_use]
    pub fn apply_indices(&self, products: &[Product]) -> Vec<usize> {
        let term = self.search.to_lowercase();
        let mut keyed: Vec<(Option<i64>, usize)> = products
            .iter()
            .enumerate()
            .filter(|(_, p)| self.matches_with_term(p, &term))
            .map(|(i, p)| (parse_timestamp(self.sort.date_of(p)), i))
            .collect();

        let descending = self.sort.descending();
        keyed.sort_by(|(a, _), (b, _)| match (a, b) {
            (Some(a), Some(b)) if descending => b.cmp(a),
            (Some(a), Some(b)) => a.cmp(b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });

        keyed.into_iter().map(|(_, i)| i).collect()
    }
}

/// Distinct vendor names, case-insensitively ordered.
#[must_use]
pub fn vendors(products: &[Product]) -> Vec<String> {
    distinct_sorted(products.iter().map(|p| p.vendor_name.as_str()), caseless_cmp)
}

/// Distinct product-type labels.
#[must_use]
pub fn product_types(products: &[Product]) -> Vec<String> {
    distinct_sorted(products.iter().map(|p| p.product_type.as_str()), str::cmp)
}

/// Distinct assurance-level labels, numbers compared numerically.
#[must_use]
pub fn assurance_levels(products: &[Product]) -> Vec<String> {
    distinct_sorted(products.iter().map(|p| p.assurance_level.as_str()), natural_cmp)
}

/// Formats offered for the selected media types across all products.
///
/// Empty when no media type is selected.
#[must_use]
pub fn available_formats(products: &[Product], media_types: &BTreeSet<String>) -> Vec<String> {
    if media_types.is_empty() {
        return Vec::new();
    }
    let formats: BTreeSet<&str> = products
        .iter()
        .flat_map(|p| media_types.iter().flat_map(move |m| p.formats_for(m)))
        .map(String::as_str)
        .collect();
    formats.into_iter().map(str::to_string).collect()
}

impl ProductFilter {
    /// Option lists for the selectors, derived from the full collection.
    #[must_use]
    pub fn vendors(products: &[Product]) -> Vec<String> {
        vendors(products)
    }

    #[must_use]
    pub fn product_types(products: &[Product]) -> Vec<String> {
        product_types(products)
    }

    #[must_use]
    pub fn assurance_levels(products: &[Product]) -> Vec<String> {
        assurance_levels(products)
    }

    /// Formats selectable under the current media-type selection.
    #[must_use]
    pub fn available_formats(&self, products: &[Product]) -> Vec<String> {
        available_formats(products, &self.media_types)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn product(id: &str, vendor: &str, media: &[(&str, &[&str])]) -> Product {
        let formats_by_media_type: BTreeMap<String, Vec<String>> = media
            .iter()
            .map(|(m, f)| ((*m).to_string(), f.iter().map(|s| (*s).to_string()).collect()))
            .collect();
        let mut all: Vec<String> = formats_by_media_type.values().flatten().cloned().collect();
        all.sort();
        all.dedup();
        Product {
            record_id: id.to_string(),
            vendor_name: vendor.to_string(),
            product_name: format!("{vendor} product {id}"),
            product_type: "Generator".to_string(),
            assurance_level: "N/A".to_string(),
            supported_media_types: formats_by_media_type.keys().cloned().collect(),
            supported_file_formats: all,
            formats_by_media_type,
            ..Default::default()
        }
    }

    fn dated(id: &str, conformance: &str) -> Product {
        Product {
            record_id: id.to_string(),
            conformance_date: conformance.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_vendor_and_media_type_filter() {
        let products = vec![
            product("1", "Acme", &[("image", &["jpeg"])]),
            product("2", "Acme", &[("video", &["mp4"])]),
            product("3", "Acme Labs", &[("image", &["png"])]),
            product("4", "Other", &[("image", &["jpeg"])]),
        ];
        let mut filter = ProductFilter::new();
        filter.vendor = "Acme".to_string();
        filter.set_media_types(["image".to_string()]);

        let ids: Vec<_> = filter.apply(&products).iter().map(|p| p.record_id.as_str()).collect();
        assert_eq!(ids, ["1"]);
    }

    #[test]
    fn test_media_types_match_any() {
        let products = vec![
            product("1", "A", &[("image", &["jpeg"])]),
            product("2", "B", &[("audio", &["mp3"])]),
            product("3", "C", &[("fonts", &["otf"])]),
        ];
        let mut filter = ProductFilter::new();
        filter.toggle_media_type("image");
        filter.toggle_media_type("audio");
        assert_eq!(filter.apply(&products).len(), 2);
    }

    #[test]
    fn test_clearing_media_types_clears_formats() {
        let mut filter = ProductFilter::new();
        filter.toggle_media_type("image");
        filter.toggle_format("jpeg");
        assert_eq!(filter.formats().len(), 1);

        filter.clear_media_types();
        assert!(filter.formats().is_empty());

        filter.clear_media_types();
        assert!(filter.formats().is_empty());
        assert!(filter.media_types().is_empty());
    }

    #[test]
    fn test_untoggling_last_media_type_clears_formats() {
        let mut filter = ProductFilter::new();
        filter.toggle_media_type("video");
        filter.toggle_format("mp4");
        filter.toggle_media_type("video");
        assert!(filter.formats().is_empty());
    }

    #[test]
    fn test_formats_without_media_type_are_dropped() {
        let mut filter = ProductFilter::new();
        filter.set_formats(["png".to_string()]);
        assert!(filter.formats().is_empty());
    }

    #[test]
    fn test_format_filter() {
        let products = vec![
            product("1", "A", &[("image", &["jpeg", "png"])]),
            product("2", "B", &[("image", &["heic"])]),
        ];
        let mut filter = ProductFilter::new();
        filter.toggle_media_type("image");
        filter.toggle_format("png");
        let ids: Vec<_> = filter.apply(&products).iter().map(|p| p.record_id.as_str()).collect();
        assert_eq!(ids, ["1"]);
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let mut p = product("REC-77", "Acme", &[]);
        p.organizational_unit = "Imaging Division".to_string();
        let products = vec![p, product("other", "Zeta", &[])];

        let mut filter = ProductFilter::new();
        for term in ["rec-77", "ACME", "division", "product rec"] {
            filter.search = term.to_string();
            assert_eq!(filter.apply(&products).len(), 1, "term {term}");
        }
        filter.search.clear();
        assert_eq!(filter.apply(&products).len(), 2);
    }

    #[test]
    fn test_sort_by_conformance_date_ascending() {
        let products = vec![
            dated("a", "2023-01-01"),
            dated("b", "2022-06-15"),
            dated("c", "2023-06-01"),
        ];
        let filter = ProductFilter {
            sort: ProductSortKey::ConformanceDateAsc,
            ..Default::default()
        };
        let dates: Vec<_> = filter
            .apply(&products)
            .iter()
            .map(|p| p.conformance_date.as_str())
            .collect();
        assert_eq!(dates, ["2022-06-15", "2023-01-01", "2023-06-01"]);
    }

    #[test]
    fn test_default_sort_is_newest_conformance_first() {
        let products = vec![dated("a", "2022-01-01"), dated("b", "2024-03-01T10:00:00Z")];
        let ids: Vec<_> = ProductFilter::new()
            .apply(&products)
            .iter()
            .map(|p| p.record_id.as_str())
            .collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn test_sort_is_stable_and_unparseable_dates_go_last() {
        let products = vec![
            dated("bad", "soon"),
            dated("x", "2023-01-01"),
            dated("y", "2023-01-01"),
            dated("z", "2021-01-01"),
        ];
        for sort in [ProductSortKey::ConformanceDateAsc, ProductSortKey::ConformanceDateDesc] {
            let filter = ProductFilter { sort, ..Default::default() };
            let ids: Vec<_> = filter.apply(&products).iter().map(|p| p.record_id.as_str()).collect();
            assert_eq!(ids.last(), Some(&"bad"));
            let x = ids.iter().position(|id| *id == "x").unwrap();
            let y = ids.iter().position(|id| *id == "y").unwrap();
            assert!(x < y, "ties keep input order for {sort}");
        }
    }

    #[test]
    fn test_creation_date_sort() {
        let mut old = dated("old", "");
        old.creation_date = "2020-05-05".to_string();
        let mut new = dated("new", "");
        new.creation_date = "2021-05-05".to_string();
        let products = vec![old, new];
        let filter = ProductFilter {
            sort: ProductSortKey::CreationDateDesc,
            ..Default::default()
        };
        assert_eq!(filter.apply(&products)[0].record_id, "new");
    }

    #[test]
    fn test_is_active_and_reset() {
        let mut filter = ProductFilter::new();
        assert!(!filter.is_active());
        filter.sort = ProductSortKey::CreationDateAsc;
        assert!(!filter.is_active());
        filter.assurance_level = "Level 1".to_string();
        assert!(filter.is_active());
        filter.reset();
        assert_eq!(filter, ProductFilter::default());
    }

    #[test]
    fn test_option_lists() {
        let mut a = product("1", "beta", &[("image", &["png"]), ("video", &["mp4"])]);
        a.assurance_level = "Level 10".to_string();
        let mut b = product("2", "Alpha", &[("image", &["jpeg"])]);
        b.assurance_level = "Level 2".to_string();
        b.product_type = "Validator".to_string();
        let products = vec![a, b, product("3", "beta", &[("audio", &["mp3"])])];

        assert_eq!(vendors(&products), ["Alpha", "beta"]);
        assert_eq!(product_types(&products), ["Generator", "Validator"]);
        assert_eq!(assurance_levels(&products), ["Level 2", "Level 10", "N/A"]);

        let mut filter = ProductFilter::new();
        assert!(filter.available_formats(&products).is_empty());
        filter.toggle_media_type("image");
        assert_eq!(filter.available_formats(&products), ["jpeg", "png"]);
    }

    #[test]
    fn test_sort_key_parsing() {
        assert_eq!(
            "conformanceDateAsc".parse::<ProductSortKey>().unwrap(),
            ProductSortKey::ConformanceDateAsc
        );
        assert_eq!(
            "creation-date-desc".parse::<ProductSortKey>().unwrap(),
            ProductSortKey::CreationDateDesc
        );
        assert!("sideways".parse::<ProductSortKey>().is_err());
        assert_eq!(ProductSortKey::CreationDateAsc.next(), ProductSortKey::ConformanceDateDesc);
    }

    #[test]
    fn test_parse_timestamp_formats() {
        assert!(parse_timestamp("2024-02-29").is_some());
        assert!(parse_timestamp("2024-02-29T12:30:00Z").is_some());
        assert!(parse_timestamp("2024-02-29T12:30:00").is_some());
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("2022-06-15") < parse_timestamp("2023-01-01"));
    }
}

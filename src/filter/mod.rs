//! Filtering and sorting over normalized collections.
//!
//! Every function here is pure: the caller owns the filter state and
//! re-runs [`ProductFilter::apply`] / [`CertificateFilter::apply`] whenever
//! the state or the underlying collection changes.

mod certificates;
mod products;

pub use certificates::CertificateFilter;
pub use products::{parse_timestamp, ProductFilter, ProductSortKey, MEDIA_TYPES};

use std::cmp::Ordering;

/// Case-insensitive substring match; an empty needle always matches.
#[must_use]
pub fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    needle_lower.is_empty() || haystack.to_lowercase().contains(needle_lower)
}

/// Distinct values, ordered by `cmp`.
pub(crate) fn distinct_sorted<'a>(
    values: impl Iterator<Item = &'a str>,
    cmp: fn(&str, &str) -> Ordering,
) -> Vec<String> {
    let mut out: Vec<String> = values.map(str::to_string).collect();
    out.sort_by(|a, b| cmp(a, b));
    out.dedup();
    out
}

/// Case-insensitive ordering with a byte-order tiebreak.
#[must_use]
pub fn caseless_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Ordering that compares embedded digit runs numerically ("Level 2" < "Level 10").
#[must_use]
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();

    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {
                let ln = take_number(&mut left);
                let rn = take_number(&mut right);
                match ln.cmp(&rn) {
                    Ordering::Equal => {}
                    other => return other,
                }
            }
            (Some(l), Some(r)) => {
                match l.to_lowercase().cmp(r.to_lowercase()) {
                    Ordering::Equal => {}
                    other => return other,
                }
                left.next();
                right.next();
            }
        }
    }
}

fn take_number(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> u128 {
    let mut value: u128 = 0;
    while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
        value = value.saturating_mul(10).saturating_add(u128::from(d));
        chars.next();
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_cmp_orders_numbers_numerically() {
        let mut levels = vec!["Level 10", "N/A", "Level 2", "Level 1"];
        levels.sort_by(|a, b| natural_cmp(a, b));
        assert_eq!(levels, ["Level 1", "Level 2", "Level 10", "N/A"]);
    }

    #[test]
    fn test_caseless_cmp() {
        let mut vendors = vec!["beta", "Alpha", "alpha", "Gamma"];
        vendors.sort_by(|a, b| caseless_cmp(a, b));
        assert_eq!(vendors, ["Alpha", "alpha", "beta", "Gamma"]);
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Example Root CA", "root"));
        assert!(contains_ignore_case("anything", ""));
        assert!(!contains_ignore_case("Example", "sample x"));
    }

    #[test]
    fn test_distinct_sorted_dedups() {
        let values = ["b", "a", "b", "c", "a"];
        assert_eq!(distinct_sorted(values.into_iter(), caseless_cmp), ["a", "b", "c"]);
    }
}

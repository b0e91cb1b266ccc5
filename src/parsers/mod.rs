//! Dataset normalizers.
//!
//! Both normalizers are pure, single-pass functions:
//!
//! - [`normalize_products`] flattens raw conforming-product records into
//!   [`Product`](crate::model::Product)s.
//! - [`parse_pem_bundle`] splits a concatenated PEM trust list into
//!   [`Certificate`](crate::model::Certificate)s.
//!
//! ```
//! use c2pa_explorer::parsers::parse_pem_bundle;
//!
//! let text = "CN=Root, O=Example\n-----BEGIN CERTIFICATE-----\nAAAA\n-----END CERTIFICATE-----\n";
//! let certs = parse_pem_bundle(text);
//! assert_eq!(certs[0].organization, "Example");
//! ```

mod pem;
mod products;

pub use pem::{extract_subject_field, parse_pem_bundle, PEM_BEGIN, PEM_END};
pub use products::{friendly_product_type, normalize_product, normalize_products, parse_products_str};

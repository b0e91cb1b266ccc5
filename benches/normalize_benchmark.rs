//! Benchmarks for dataset normalization and filtering.

use c2pa_explorer::filter::{ProductFilter, ProductSortKey};
use c2pa_explorer::parsers::{parse_pem_bundle, parse_products_str};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

const MEDIA: [&str; 4] = ["image", "video", "audio", "documents"];

fn products_json(count: usize) -> String {
    let records: Vec<_> = (0..count)
        .map(|i| {
            let media = MEDIA[i % MEDIA.len()];
            serde_json::json!({
                "recordId": format!("CP-{i:05}"),
                "applicant": format!("Vendor {}", i % 40),
                "product": {
                    "productType": if i % 3 == 0 { "validatorProduct" } else { "generatorProduct" },
                    "DN": {"CN": format!("Product {i}"), "O": "Org", "C": "US"},
                    "assurance": {"maxAssuranceLevel": i % 3}
                },
                "specVersion": ["2.1"],
                "containers": {
                    "generate": {media: ["fmt-a", format!("fmt-{}", i % 7)]},
                    "validate": {"image": ["jpeg", "png"]}
                },
                "dates": {
                    "creation": format!("2023-{:02}-{:02}", i % 12 + 1, i % 28 + 1),
                    "conformance": format!("2024-{:02}-{:02}", i % 12 + 1, i % 28 + 1)
                }
            })
        })
        .collect();
    serde_json::to_string(&records).unwrap()
}

fn pem_bundle(count: usize) -> String {
    (0..count)
        .map(|i| {
            format!(
                "CN=Issuer {i}, O=Org {}, C=US\n-----BEGIN CERTIFICATE-----\n{}\n-----END CERTIFICATE-----\n",
                i % 25,
                "QUJD".repeat(64)
            )
        })
        .collect()
}

fn benchmark_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    for size in [100, 1_000] {
        let json = products_json(size);
        group.bench_with_input(BenchmarkId::new("products", size), &json, |b, json| {
            b.iter(|| parse_products_str(black_box(json)).unwrap());
        });

        let pem = pem_bundle(size);
        group.bench_with_input(BenchmarkId::new("pem_bundle", size), &pem, |b, pem| {
            b.iter(|| parse_pem_bundle(black_box(pem)));
        });
    }
    group.finish();
}

fn benchmark_filter(c: &mut Criterion) {
    let products = parse_products_str(&products_json(1_000)).unwrap();
    let mut filter = ProductFilter::sorted_by(ProductSortKey::CreationDateAsc);
    filter.search = "product 9".to_string();
    filter.toggle_media_type("image");

    c.bench_function("filter_and_sort_1000", |b| {
        b.iter(|| filter.apply_indices(black_box(&products)));
    });
}

criterion_group!(benches, benchmark_normalize, benchmark_filter);
criterion_main!(benches);

//! Encoding latency benchmarks.
//!
//! ```bash
//! cargo bench -p resale-encoding
//! ```

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use resale_encoding::{AttributeSet, FeatureEncoder, FeatureLayout, FeatureSchema, encode};

fn attributes() -> AttributeSet {
    AttributeSet::parse("BEDOK", "4 ROOM", "MODEL A", 90.0, "07 TO 09", 2005)
        .expect("valid attributes")
}

fn benchmark_encode(c: &mut Criterion) {
    let schema = FeatureSchema::full();
    let encoder = FeatureEncoder::new(&schema);
    let attrs = attributes();

    c.bench_function("encode_resolved_layout", |b| {
        b.iter(|| encoder.encode(black_box(&attrs)));
    });

    c.bench_function("encode_with_schema_resolution", |b| {
        b.iter(|| encode(black_box(&attrs), black_box(&schema)));
    });
}

fn benchmark_resolve(c: &mut Criterion) {
    let schema = FeatureSchema::full();

    c.bench_function("layout_resolve", |b| {
        b.iter(|| FeatureLayout::resolve(black_box(&schema)));
    });
}

criterion_group!(benches, benchmark_encode, benchmark_resolve);
criterion_main!(benches);

//! Benchmarks for key construction and grouping.

use std::collections::HashMap;
use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use structural_key::{BigEndianIntCoder, CborCoder, Coder, StringUtf8Coder, StructuralKey};

/// Builds 1k integer keys and groups them into 10 buckets.
fn bench_group_ints(c: &mut Criterion) {
    let coder: Arc<dyn Coder<i32>> = Arc::new(BigEndianIntCoder);

    c.bench_function("group_1k_int_keys", |b| {
        b.iter(|| {
            let mut groups: HashMap<StructuralKey<i32>, u32> = HashMap::new();
            for n in 0..1_000 {
                let key = StructuralKey::of(&(n % 10), coder.clone()).unwrap();
                *groups.entry(key).or_default() += 1;
            }
            black_box(groups.len())
        });
    });
}

fn bench_string_key(c: &mut Criterion) {
    let coder: Arc<dyn Coder<String>> = Arc::new(StringUtf8Coder);
    let value = "a-moderately-long-grouping-key".to_string();

    c.bench_function("string_key_of", |b| {
        b.iter(|| StructuralKey::of(black_box(&value), coder.clone()).unwrap());
    });
}

/// Canonical CBOR has to sort map entries on every construction.
fn bench_cbor_map_key(c: &mut Criterion) {
    let coder: Arc<dyn Coder<HashMap<String, u64>>> =
        Arc::new(CborCoder::<HashMap<String, u64>>::new());
    let value: HashMap<String, u64> = (0..16).map(|i| (format!("field-{i}"), i)).collect();

    c.bench_function("cbor_map_key_of", |b| {
        b.iter(|| StructuralKey::of(black_box(&value), coder.clone()).unwrap());
    });
}

criterion_group!(benches, bench_group_ints, bench_string_key, bench_cbor_map_key);
criterion_main!(benches);

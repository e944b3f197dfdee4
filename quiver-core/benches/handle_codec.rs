//! Microbenchmarks for the handle codec.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quiver_core::encoding::{decode_property_id, decode_type_id, encode_handle};
use quiver_core::types::{PropertyId, VertexTypeId};

fn bench_encode(c: &mut Criterion) {
    c.bench_function("encode_handle", |b| {
        b.iter(|| encode_handle(black_box(VertexTypeId::new(7)), black_box(PropertyId::new(3))));
    });
}

fn bench_decode(c: &mut Criterion) {
    let handle = encode_handle(VertexTypeId::new(7), PropertyId::new(3));
    c.bench_function("decode_property_id", |b| {
        b.iter(|| decode_property_id(black_box(handle)));
    });
    c.bench_function("decode_type_id", |b| {
        b.iter(|| decode_type_id(black_box(handle)));
    });
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);

//! Criterion benchmark for encode / decode throughput.
//!
//! Run with: cargo bench -p hexpng-core

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use hexpng_core::constants::PNG_SIGNATURE;
use hexpng_core::{decode, encode, Signature, Style};

fn payload(len: usize) -> Vec<u8> {
    let mut data = PNG_SIGNATURE.to_vec();
    data.extend((0..len).map(|i| (i % 251) as u8));
    data
}

fn bench_encode(c: &mut Criterion) {
    let data = payload(64 * 1024);
    let mut group = c.benchmark_group("encode");
    group.throughput(Throughput::Bytes(data.len() as u64));

    group.bench_function("plain", |b| b.iter(|| encode(black_box(&data), Style::Plain)));
    group.bench_function("xxd", |b| b.iter(|| encode(black_box(&data), Style::Annotated)));

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let data = payload(64 * 1024);
    let sig = Signature::png();
    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Bytes(data.len() as u64));

    for style in [Style::Plain, Style::Annotated] {
        // Leading padding forces a real scan
        let text = format!("00ff00ff\n{}", encode(&data, style));
        group.bench_function(style.as_str(), |b| {
            b.iter(|| decode(black_box(&text), &sig).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);

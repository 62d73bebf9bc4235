//! Benchmarks for the polynomial ring engine
//!
//! Measures the forward and inverse NTT, the base-case multiplication and
//! the two samplers.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pqkem_algorithms::keccak::Shake128Sponge;
use pqkem_algorithms::poly::prelude::*;

fn sample_poly() -> Polynomial<MlKemModulus> {
    let mut buf = [0u8; CBD_ETA2_BYTES];
    for (i, b) in buf.iter_mut().enumerate() {
        *b = (i as u8).wrapping_mul(151).wrapping_add(7);
    }
    sample_cbd_eta2(&buf)
}

fn bench_ntt(c: &mut Criterion) {
    let mut group = c.benchmark_group("mlkem_ntt");
    let poly = sample_poly();
    let poly_hat = poly.ntt();

    group.bench_function("forward", |b| b.iter(|| black_box(black_box(&poly).ntt())));

    group.bench_function("inverse", |b| {
        b.iter(|| black_box(black_box(&poly_hat).inv_ntt()))
    });

    group.bench_function("basemul", |b| {
        b.iter(|| black_box(black_box(&poly_hat).basemul(&poly_hat)))
    });

    group.finish();
}

fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("mlkem_sampling");

    group.bench_function("uniform", |b| {
        b.iter(|| {
            let mut xof = Shake128Sponge::new();
            xof.absorb_final(black_box(&[0u8; 34]));
            black_box(sample_uniform::<MlKemModulus>(&mut xof))
        })
    });

    let buf = [0xA5u8; CBD_ETA2_BYTES];
    group.bench_function("cbd_eta2", |b| {
        b.iter(|| black_box(sample_cbd_eta2::<MlKemModulus>(black_box(&buf))))
    });

    group.finish();
}

fn bench_reduction(c: &mut Criterion) {
    c.bench_function("montgomery_reduce", |b| {
        b.iter(|| montgomery_reduce::<MlKemModulus>(black_box(1_234_567)))
    });
    c.bench_function("barrett_reduce", |b| {
        b.iter(|| barrett_reduce::<MlKemModulus>(black_box(-30_000)))
    });
}

criterion_group!(benches, bench_ntt, bench_sampling, bench_reduction);
criterion_main!(benches);

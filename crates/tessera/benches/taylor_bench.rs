//! Benchmarks for Taylor shift and modular composition.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use tessera_integers::{Integer, Mod998244353};
use tessera_poly::algorithms::taylor_shift::{taylor_shift_divconquer, taylor_shift_horner};
use tessera_poly::{compose_mod_preinv, inv_series_newton, DensePoly};

fn integer_poly(len: usize) -> DensePoly<Integer> {
    DensePoly::new((0..len).map(|i| Integer::new((i as i64 % 100) - 50)).collect())
}

fn field_poly(len: usize, seed: u64) -> DensePoly<Mod998244353> {
    DensePoly::new(
        (0..len as u64)
            .map(|i| Mod998244353::new(i.wrapping_mul(seed).wrapping_add(seed) % 998_244_353))
            .collect(),
    )
}

fn bench_taylor_shift(c: &mut Criterion) {
    let mut group = c.benchmark_group("taylor_shift");
    let shift = Integer::new(3);

    // straddles the 256-coefficient switch between the two algorithms
    for len in [64, 256, 512, 1024] {
        let f = integer_poly(len);

        group.bench_with_input(BenchmarkId::new("horner", len), &len, |b, _| {
            b.iter(|| black_box(taylor_shift_horner(&f, &shift)))
        });
        group.bench_with_input(BenchmarkId::new("divconquer", len), &len, |b, _| {
            b.iter(|| black_box(taylor_shift_divconquer(&f, &shift)))
        });
    }

    group.finish();
}

fn bench_compose_mod(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose_mod_preinv");

    for len in [16, 64, 256] {
        let a = field_poly(len - 1, 7);
        let b = field_poly(len - 1, 11);
        let modulus = field_poly(len, 13);
        let cinv = inv_series_newton(&modulus.reverse(modulus.len()), modulus.len());

        group.bench_with_input(BenchmarkId::new("horner", len), &len, |bench, _| {
            bench.iter(|| black_box(compose_mod_preinv(&a, &b, &modulus, &cinv)))
        });
    }

    group.finish();
}

criterion_group!(taylor_benches, bench_taylor_shift, bench_compose_mod);
criterion_main!(taylor_benches);
